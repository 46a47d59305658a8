//! An in-process endpoint over a fixed set of triples.
//!
//! Answers [`RoleQuery`]s directly instead of parsing query text. Terms match
//! canonically in every position, so `<http://x/a>` and `http://x/a` are the
//! same node. Named graphs stand in for the `FROM <dataset>` scope.

use crate::endpoint::Endpoint;
use crate::error::QueryError;
use crate::query::{RoleQuery, SolutionRow};
use crate::service::QueryService;
use motif_core::{canonicalize, Role, Triple};

#[derive(Debug, Clone, Default)]
pub struct InMemoryEndpoint {
    quads: Vec<(Option<String>, Triple)>,
}

impl InMemoryEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut endpoint = Self::new();
        for t in triples {
            endpoint.insert(None, t);
        }
        endpoint
    }

    /// Add a triple, optionally to a named graph.
    pub fn insert(&mut self, graph: Option<&str>, triple: Triple) {
        self.quads.push((graph.map(canonicalize), triple));
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

fn bind(row: &mut SolutionRow, var: &str, value: &str) {
    row.insert(var.to_string(), value.to_string());
}

impl QueryService for InMemoryEndpoint {
    fn select(
        &self,
        _endpoint: &Endpoint,
        query: &RoleQuery,
    ) -> Result<Vec<SolutionRow>, QueryError> {
        let term = canonicalize(&query.term);
        let dataset = query.dataset.as_deref().map(canonicalize);

        let rows = self
            .quads
            .iter()
            .filter(|(graph, _)| dataset.is_none() || graph.as_deref() == dataset.as_deref())
            .map(|(_, t)| t)
            .filter(|t| canonicalize(t.term(query.role)) == term)
            .take(query.limit)
            .map(|t| {
                let mut row = SolutionRow::new();
                for role in Role::ALL {
                    if role == query.role {
                        continue;
                    }
                    let var = match role {
                        Role::Subject => "s",
                        Role::Predicate => "p",
                        Role::Object => "o",
                    };
                    bind(&mut row, var, t.term(role));
                }
                row
            })
            .collect();
        Ok(rows)
    }
}
