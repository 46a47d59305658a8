//! Endpoint validation and query-position term encoding.

use crate::error::FinderError;
use motif_core::canonicalize;
use std::fmt;
use url::Url;

/// A validated SPARQL endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    /// Validate `endpoint` as an absolute `http`/`https` URL.
    ///
    /// Runs before any network call is attempted.
    pub fn parse(endpoint: &str) -> Result<Self, FinderError> {
        let invalid = |reason: String| FinderError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Whether `term` (after stripping decoration) is an absolute, hierarchical URL.
///
/// Prefixed names such as `dbo:birthPlace` and opaque URIs (`mailto:`, `urn:`)
/// are not treated as URLs.
pub fn is_url(term: &str) -> bool {
    match Url::parse(&canonicalize(term)) {
        Ok(url) => !url.cannot_be_a_base(),
        Err(_) => false,
    }
}

/// Strip one enclosing `<…>`, `'…'` or `"…"` from `term`.
///
/// Characters inside the term are left untouched.
fn strip_enclosing(term: &str) -> &str {
    for (open, close) in [('<', '>'), ('\'', '\''), ('"', '"')] {
        if let Some(inner) = term.strip_prefix(open).and_then(|t| t.strip_suffix(close)) {
            return inner;
        }
    }
    term
}

/// Encode `term` for use as a subject/predicate/object in a query.
///
/// URLs become `<iri>`, anything else a single-quoted literal with `\`, `'`
/// and line breaks escaped.
pub fn wrap_term(term: &str) -> String {
    let bare = strip_enclosing(term);
    if is_url(bare) {
        return format!("<{bare}>");
    }

    let mut out = String::with_capacity(bare.len() + 2);
    out.push('\'');
    for c in bare.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_requires_absolute_http_url() {
        assert!(Endpoint::parse("https://dbpedia.org/sparql").is_ok());
        assert!(Endpoint::parse(" http://localhost:8890/sparql ").is_ok());

        for bad in ["", "dbpedia.org/sparql", "ftp://x/sparql", "not a url", "http://"] {
            let err = Endpoint::parse(bad).unwrap_err();
            assert!(
                matches!(err, FinderError::InvalidEndpoint { .. }),
                "expected InvalidEndpoint for {bad:?}"
            );
        }
    }

    #[test]
    fn urls_are_wrapped_in_angle_brackets() {
        assert_eq!(
            wrap_term("http://dbpedia.org/resource/Berlin"),
            "<http://dbpedia.org/resource/Berlin>"
        );
        assert_eq!(
            wrap_term("<http://dbpedia.org/resource/Berlin>"),
            "<http://dbpedia.org/resource/Berlin>"
        );
    }

    #[test]
    fn other_terms_are_quoted_literals() {
        assert_eq!(wrap_term("Berlin"), "'Berlin'");
        assert_eq!(wrap_term("'Berlin'"), "'Berlin'");
        assert_eq!(wrap_term("dbo:birthPlace"), "'dbo:birthPlace'");
        assert_eq!(wrap_term("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn quotes_inside_literals_survive_wrapping() {
        assert_eq!(wrap_term("O'Brien"), "'O\\'Brien'");
        assert_eq!(wrap_term("'O'Brien'"), "'O\\'Brien'");
        assert_eq!(wrap_term("\"O'Brien\""), "'O\\'Brien'");
        assert_eq!(wrap_term("a\"b<c>"), "'a\"b<c>'");
        assert_eq!(wrap_term("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn opaque_uris_are_not_urls() {
        assert!(is_url("http://x.org/a"));
        assert!(!is_url("mailto:someone@example.org"));
        assert!(!is_url("urn:isbn:0451450523"));
        assert!(!is_url("Berlin"));
    }
}
