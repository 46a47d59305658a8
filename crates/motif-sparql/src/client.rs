//! Remote query client: role queries in, canonical triples out.

use crate::endpoint::Endpoint;
use crate::error::{FinderError, QueryError};
use crate::query::{RoleQueries, RoleQuery};
use crate::service::QueryService;
use motif_core::Triple;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone)]
pub struct RemoteQueryClient {
    service: Arc<dyn QueryService>,
}

impl std::fmt::Debug for RemoteQueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteQueryClient").finish_non_exhaustive()
    }
}

impl RemoteQueryClient {
    pub fn new(service: Arc<dyn QueryService>) -> Self {
        Self { service }
    }

    /// Run one role query.
    ///
    /// A malformed query is logged and yields no triples so the sibling role
    /// queries still count; an unreachable endpoint is an error.
    pub fn fetch_role(
        &self,
        endpoint: &Endpoint,
        query: &RoleQuery,
    ) -> Result<HashSet<Triple>, FinderError> {
        match self.service.select(endpoint, query) {
            Ok(rows) => Ok(rows
                .iter()
                .filter_map(|row| query.triple_from_row(row))
                .collect()),
            Err(QueryError::Malformed(message)) => {
                let err = FinderError::MalformedQuery {
                    role: query.role,
                    message,
                };
                tracing::warn!(
                    endpoint = %endpoint,
                    role = %query.role,
                    term = %query.term,
                    error = %err,
                    "role query failed; continuing without its results"
                );
                Ok(HashSet::new())
            }
            Err(QueryError::Unavailable(message)) => Err(FinderError::EndpointUnavailable {
                endpoint: endpoint.to_string(),
                message,
            }),
        }
    }

    /// Fetch every triple `term` takes part in, one role query after another.
    ///
    /// `endpoint` is validated before any query is sent.
    pub fn fetch_triples(
        &self,
        term: &str,
        endpoint: &str,
        dataset: Option<&str>,
        limit: usize,
    ) -> Result<HashSet<Triple>, FinderError> {
        let endpoint = Endpoint::parse(endpoint)?;
        let queries = RoleQueries::build(term, dataset, limit);
        let mut out = HashSet::new();
        for query in queries.iter() {
            out.extend(self.fetch_role(&endpoint, query)?);
        }
        Ok(out)
    }
}
