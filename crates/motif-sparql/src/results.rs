//! SPARQL 1.1 JSON results decoding.
//!
//! Bound values are rendered back into term syntax so they line up with how
//! the queried term itself is written: IRIs as `<iri>`, literals single-quoted,
//! blank nodes as `_:label`.

use crate::error::QueryError;
use crate::query::SolutionRow;
use serde::Deserialize;
use std::collections::HashMap;

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    #[serde(default)]
    head: Head,
    results: Option<Bindings>,
}

#[derive(Debug, Default, Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Bindings {
    #[serde(default)]
    bindings: Vec<HashMap<String, BoundTerm>>,
}

#[derive(Debug, Deserialize)]
struct BoundTerm {
    #[serde(rename = "type")]
    kind: String,
    value: String,
}

impl BoundTerm {
    fn render(&self) -> Option<String> {
        match self.kind.as_str() {
            "uri" => Some(format!("<{}>", self.value)),
            "literal" | "typed-literal" => Some(format!("'{}'", self.value)),
            "bnode" => Some(format!("_:{}", self.value)),
            _ => None,
        }
    }
}

/// Decode a SPARQL JSON results body into solution rows.
///
/// A body that is not a results document (an HTML error page, an ASK
/// response, truncated JSON) is reported as [`QueryError::Malformed`].
/// Bindings of unknown term types are dropped from their row.
pub fn parse_results(body: &str) -> Result<Vec<SolutionRow>, QueryError> {
    let doc: ResultsDocument = serde_json::from_str(body)
        .map_err(|e| QueryError::Malformed(format!("invalid SPARQL JSON results: {e}")))?;

    let Some(results) = doc.results else {
        return Err(QueryError::Malformed(
            "response has no `results` section".to_string(),
        ));
    };

    let projected = doc.head.vars;
    let rows = results
        .bindings
        .into_iter()
        .map(|binding| {
            binding
                .into_iter()
                .filter(|(var, _)| projected.is_empty() || projected.contains(var))
                .filter_map(|(var, term)| term.render().map(|t| (var, t)))
                .collect::<SolutionRow>()
        })
        .collect();
    Ok(rows)
}

/// Map a non-success HTTP status to a query error.
///
/// Rate limiting and gateway statuses mean the endpoint is unreachable;
/// everything else is treated as the endpoint rejecting this query.
pub fn classify_status(status: u16, body: &str) -> QueryError {
    let snippet: String = body.chars().take(200).collect();
    match status {
        429 | 502..=504 => QueryError::Unavailable(format!("http status {status}: {snippet}")),
        _ => QueryError::Malformed(format!("http status {status}: {snippet}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bindings_into_rendered_terms() {
        let body = r#"{
            "head": { "vars": ["p", "o"] },
            "results": { "bindings": [
                { "p": { "type": "uri", "value": "http://x/p" },
                  "o": { "type": "literal", "value": "Berlin", "xml:lang": "en" } },
                { "p": { "type": "uri", "value": "http://x/q" },
                  "o": { "type": "bnode", "value": "b0" } },
                { "p": { "type": "uri", "value": "http://x/r" },
                  "o": { "type": "typed-literal", "value": "3",
                         "datatype": "http://www.w3.org/2001/XMLSchema#integer" } }
            ] }
        }"#;

        let rows = parse_results(body).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["p"], "<http://x/p>");
        assert_eq!(rows[0]["o"], "'Berlin'");
        assert_eq!(rows[1]["o"], "_:b0");
        assert_eq!(rows[2]["o"], "'3'");
    }

    #[test]
    fn unprojected_variables_are_ignored() {
        let body = r#"{
            "head": { "vars": ["s"] },
            "results": { "bindings": [
                { "s": { "type": "uri", "value": "http://x/s" },
                  "extra": { "type": "uri", "value": "http://x/e" } }
            ] }
        }"#;
        let rows = parse_results(body).unwrap();
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn empty_result_set_is_not_an_error() {
        let body = r#"{ "head": { "vars": ["p", "o"] }, "results": { "bindings": [] } }"#;
        assert!(parse_results(body).unwrap().is_empty());
    }

    #[test]
    fn non_results_bodies_are_malformed() {
        assert!(matches!(
            parse_results("<html>Virtuoso 37000 Error SP030</html>"),
            Err(QueryError::Malformed(_))
        ));
        assert!(matches!(
            parse_results(r#"{ "head": {}, "boolean": true }"#),
            Err(QueryError::Malformed(_))
        ));
    }

    #[test]
    fn status_classification() {
        assert!(matches!(classify_status(400, "syntax"), QueryError::Malformed(_)));
        assert!(matches!(classify_status(500, "SR171"), QueryError::Malformed(_)));
        assert!(matches!(classify_status(503, ""), QueryError::Unavailable(_)));
        assert!(matches!(classify_status(504, ""), QueryError::Unavailable(_)));
        assert!(matches!(
            classify_status(429, "Too Many Requests"),
            QueryError::Unavailable(_)
        ));
        assert!(matches!(classify_status(404, ""), QueryError::Malformed(_)));
    }
}
