//! Parallel role executor.
//!
//! The role queries for one term run concurrently on a shared rayon pool and
//! their triples are merged by set union. A caller outside the pool blocks in
//! `install` while all three queries run on pool workers. A caller that is
//! already a pool worker runs the subject query itself and offers the other
//! two for stealing. Nested calls from inside the pool cannot starve each
//! other because a blocked `join` keeps stealing.

use crate::client::RemoteQueryClient;
use crate::endpoint::Endpoint;
use crate::error::FinderError;
use crate::query::{RoleQueries, RoleQuery};
use motif_core::Triple;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::collections::HashSet;
use std::sync::Arc;

/// Build the worker pool shared by every executor cloned from one search.
pub fn role_pool(threads: usize) -> Result<Arc<ThreadPool>, FinderError> {
    ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(|i| format!("motif-role-{i}"))
        .build()
        .map(Arc::new)
        .map_err(|e| FinderError::Setup(format!("failed to build role worker pool: {e}")))
}

#[derive(Debug, Clone)]
pub struct RoleExecutor {
    client: RemoteQueryClient,
    pool: Arc<ThreadPool>,
}

impl RoleExecutor {
    pub fn new(client: RemoteQueryClient, pool: Arc<ThreadPool>) -> Self {
        Self { client, pool }
    }

    pub fn client(&self) -> &RemoteQueryClient {
        &self.client
    }

    /// Derive every triple `term` takes part in.
    ///
    /// Blocks until all role queries finished. A malformed role query
    /// contributes nothing; an unreachable endpoint fails the whole call.
    pub fn derive_triples(
        &self,
        term: &str,
        endpoint: &Endpoint,
        dataset: Option<&str>,
        limit: usize,
    ) -> Result<HashSet<Triple>, FinderError> {
        let queries = RoleQueries::build(term, dataset, limit);
        let fetch = |query: &RoleQuery| self.client.fetch_role(endpoint, query);

        let (subject, (predicate, object)) = self.pool.install(|| {
            rayon::join(
                || fetch(&queries.subject),
                || {
                    rayon::join(
                        || match &queries.predicate {
                            Some(query) => fetch(query),
                            None => Ok(HashSet::new()),
                        },
                        || fetch(&queries.object),
                    )
                },
            )
        });

        let mut merged = subject?;
        merged.extend(predicate?);
        merged.extend(object?);
        Ok(merged)
    }
}
