//! Role-specific SELECT queries for one term.
//!
//! For a term `t` the three shapes are:
//!
//! ```text
//! subject    SELECT ?p ?o WHERE { t ?p ?o }
//! predicate  SELECT ?s ?o WHERE { ?s t ?o }   (only when t is a URL)
//! object     SELECT ?s ?p WHERE { ?s ?p t }
//! ```
//!
//! each optionally scoped with `FROM <dataset>` and capped with `LIMIT n`.

use crate::endpoint::{is_url, wrap_term};
use motif_core::{Role, Triple};
use std::collections::BTreeMap;

/// One solution row: variable name (without `?`) to rendered term.
pub type SolutionRow = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuery {
    pub role: Role,
    /// The term as the caller supplied it.
    pub term: String,
    /// The term as it appears in the query text.
    pub wrapped: String,
    pub dataset: Option<String>,
    pub limit: usize,
}

impl RoleQuery {
    pub fn new(role: Role, term: &str, dataset: Option<&str>, limit: usize) -> Self {
        Self {
            role,
            term: term.to_string(),
            wrapped: wrap_term(term),
            dataset: dataset.map(str::to_string),
            limit,
        }
    }

    /// Projected variables, in triple order, for this role.
    pub fn variables(&self) -> [&'static str; 2] {
        match self.role {
            Role::Subject => ["p", "o"],
            Role::Predicate => ["s", "o"],
            Role::Object => ["s", "p"],
        }
    }

    pub fn to_sparql(&self) -> String {
        let pattern = match self.role {
            Role::Subject => format!("{} ?p ?o", self.wrapped),
            Role::Predicate => format!("?s {} ?o", self.wrapped),
            Role::Object => format!("?s ?p {}", self.wrapped),
        };
        let [a, b] = self.variables();
        let from = match &self.dataset {
            Some(dataset) => format!(" FROM <{}>", motif_core::canonicalize(dataset)),
            None => String::new(),
        };
        format!(
            "SELECT ?{a} ?{b}{from} WHERE {{ {pattern} }} LIMIT {}",
            self.limit
        )
    }

    /// Build the triple for one row, substituting the queried term in its role.
    ///
    /// Rows that do not bind both projected variables are skipped.
    pub fn triple_from_row(&self, row: &SolutionRow) -> Option<Triple> {
        let [a, b] = self.variables();
        let first = row.get(a)?.clone();
        let second = row.get(b)?.clone();
        let term = self.wrapped.clone();
        Some(match self.role {
            Role::Subject => Triple::new(term, first, second),
            Role::Predicate => Triple::new(first, term, second),
            Role::Object => Triple::new(first, second, term),
        })
    }
}

/// The role queries issued for one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQueries {
    pub subject: RoleQuery,
    /// Present only when the term is a URL; literals cannot be predicates.
    pub predicate: Option<RoleQuery>,
    pub object: RoleQuery,
}

impl RoleQueries {
    pub fn build(term: &str, dataset: Option<&str>, limit: usize) -> Self {
        let predicate = is_url(term).then(|| RoleQuery::new(Role::Predicate, term, dataset, limit));
        Self {
            subject: RoleQuery::new(Role::Subject, term, dataset, limit),
            predicate,
            object: RoleQuery::new(Role::Object, term, dataset, limit),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleQuery> {
        std::iter::once(&self.subject)
            .chain(self.predicate.as_ref())
            .chain(std::iter::once(&self.object))
    }
}
