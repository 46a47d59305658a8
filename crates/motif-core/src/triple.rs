//! Canonical triples and frontier entries.
//!
//! Endpoints decorate terms inconsistently: the same IRI may come back as
//! `<http://x/a>`, `http://x/a`, or `"http://x/a"` depending on which role it was
//! queried in. Subject and object are therefore compared after
//! [`canonicalize`]. The predicate is compared verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Characters stripped from subject/object before comparison.
const DECORATION: [char; 4] = ['<', '>', '\'', '"'];

/// Strip IRI brackets and quote decoration from a term.
///
/// Idempotent: `canonicalize(&canonicalize(x)) == canonicalize(x)`.
pub fn canonicalize(term: &str) -> String {
    term.chars().filter(|c| !DECORATION.contains(c)).collect()
}

/// Position a term occupies in a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Subject,
    Predicate,
    Object,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Subject, Role::Predicate, Role::Object];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Subject => "subject",
            Role::Predicate => "predicate",
            Role::Object => "object",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (subject, predicate, object) record with canonical equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    pub fn term(&self, role: Role) -> &str {
        match role {
            Role::Subject => &self.subject,
            Role::Predicate => &self.predicate,
            Role::Object => &self.object,
        }
    }

    pub fn canonical_subject(&self) -> String {
        canonicalize(&self.subject)
    }

    pub fn canonical_object(&self) -> String {
        canonicalize(&self.object)
    }

    /// Canonicalized (subject, predicate, object), in role order.
    ///
    /// These are the terms the frontier search expands next.
    pub fn canonical_terms(&self) -> [String; 3] {
        [
            canonicalize(&self.subject),
            canonicalize(&self.predicate),
            canonicalize(&self.object),
        ]
    }

    /// True when both triples have the same canonical subject.
    pub fn shares_subject_with(&self, other: &Triple) -> bool {
        self.canonical_subject() == other.canonical_subject()
    }
}

impl PartialEq for Triple {
    fn eq(&self, other: &Self) -> bool {
        self.predicate == other.predicate
            && self.canonical_subject() == other.canonical_subject()
            && self.canonical_object() == other.canonical_object()
    }
}

impl Eq for Triple {}

impl Hash for Triple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_subject().hash(state);
        self.predicate.hash(state);
        self.canonical_object().hash(state);
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// A triple together with the term whose expansion produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub origin_term: String,
    pub triple: Triple,
}

impl FrontierEntry {
    pub fn new(origin_term: impl Into<String>, triple: Triple) -> Self {
        Self {
            origin_term: origin_term.into(),
            triple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn canonicalize_strips_brackets_and_quotes() {
        assert_eq!(canonicalize("<http://x/a>"), "http://x/a");
        assert_eq!(canonicalize("'Berlin'"), "Berlin");
        assert_eq!(canonicalize("\"Berlin\""), "Berlin");
        assert_eq!(canonicalize("plain"), "plain");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn subject_and_object_decoration_is_ignored() {
        let a = Triple::new("<http://x/a>", "<http://x/p>", "'b'");
        let b = Triple::new("http://x/a", "<http://x/p>", "\"b\"");
        assert_eq!(a, b);

        let set: HashSet<Triple> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn predicate_is_compared_verbatim() {
        let a = Triple::new("a", "<http://x/p>", "b");
        let b = Triple::new("a", "http://x/p", "b");
        assert_ne!(a, b);
    }

    #[test]
    fn canonical_terms_follow_role_order() {
        let t = Triple::new("<s>", "<p>", "'o'");
        assert_eq!(t.canonical_terms(), ["s".to_string(), "p".into(), "o".into()]);
        assert_eq!(t.term(Role::Predicate), "<p>");
    }

    #[test]
    fn frontier_entries_distinguish_origin() {
        let t = Triple::new("a", "p", "b");
        let x = FrontierEntry::new("a", t.clone());
        let y = FrontierEntry::new("b", t.clone());
        assert_ne!(x, y);
        assert_eq!(x, FrontierEntry::new("a", Triple::new("<a>", "p", "'b'")));
    }

    fn decorate(s: &str, style: u8) -> String {
        match style % 4 {
            0 => s.to_string(),
            1 => format!("<{s}>"),
            2 => format!("'{s}'"),
            _ => format!("\"{s}\""),
        }
    }

    proptest! {
        #[test]
        fn canonicalize_is_idempotent(x in ".*") {
            let once = canonicalize(&x);
            prop_assert_eq!(canonicalize(&once), once);
        }

        #[test]
        fn decorated_subjects_and_objects_are_equal(
            s in "[a-z:/.]{1,12}",
            p in "[a-z]{1,6}",
            o in "[a-zA-Z ]{1,12}",
            ds in 0u8..4,
            do_ in 0u8..4,
        ) {
            let plain = Triple::new(s.clone(), p.clone(), o.clone());
            let decorated = Triple::new(decorate(&s, ds), p, decorate(&o, do_));
            prop_assert_eq!(&plain, &decorated);
        }

        #[test]
        fn decorated_predicates_differ(p in "[a-z]{1,6}", style in 1u8..4) {
            let plain = Triple::new("s", p.clone(), "o");
            let decorated = Triple::new("s", decorate(&p, style), "o");
            prop_assert_ne!(plain, decorated);
        }
    }
}
