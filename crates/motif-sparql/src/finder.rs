//! Frontier search: expand a seed term into the triples around it.
//!
//! ```text
//! seed ──► role executor ──► dedup FIFO ──► accept ──► expand new terms ─┐
//!                                 ▲                                      │
//!                                 └──────────── role executor ◄──────────┘
//! ```
//!
//! The loop itself is sequential; only the role queries of one expansion run
//! in parallel. `threshold` is a global budget: each expansion asks for at
//! most `threshold - accepted` rows, so highly connected terms cannot blow up
//! the search while every discovered neighbour still gets its turn.

use crate::client::RemoteQueryClient;
use crate::config::FinderConfig;
use crate::endpoint::Endpoint;
use crate::error::FinderError;
use crate::executor::{role_pool, RoleExecutor};
use crate::service::{HttpQueryService, QueryService};
use motif_core::{canonicalize, DedupQueue, FrontierEntry, Triple};
use rayon::ThreadPool;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Why a derivation stopped. Both are normal outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The queue emptied before the threshold was reached.
    FrontierExhausted,
    /// `threshold` entries were accepted.
    BudgetExhausted,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::FrontierExhausted => "frontier_exhausted",
            Termination::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Accepted entries of one derivation, in acceptance order.
///
/// Entries are unique: the queue admits each entry at most once.
#[derive(Debug, Clone, Serialize)]
pub struct Derivation {
    pub seed: String,
    pub entries: Vec<FrontierEntry>,
    pub termination: Termination,
    /// Terms (seed included) the role executor was run for.
    pub expanded_terms: Vec<String>,
}

impl Derivation {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct triples, ignoring which term produced them.
    pub fn triples(&self) -> HashSet<Triple> {
        self.entries.iter().map(|e| e.triple.clone()).collect()
    }

    pub fn into_entries(self) -> Vec<FrontierEntry> {
        self.entries
    }
}

#[derive(Debug, Clone)]
pub struct FrontierSearch {
    executor: RoleExecutor,
}

impl FrontierSearch {
    pub fn new(executor: RoleExecutor) -> Self {
        Self { executor }
    }

    /// A search over `service` with its own worker pool of `threads` workers.
    pub fn with_service(
        service: Arc<dyn QueryService>,
        threads: usize,
    ) -> Result<Self, FinderError> {
        Ok(Self::with_pool(service, role_pool(threads)?))
    }

    /// A search sharing an existing worker pool.
    pub fn with_pool(service: Arc<dyn QueryService>, pool: Arc<ThreadPool>) -> Self {
        Self::new(RoleExecutor::new(RemoteQueryClient::new(service), pool))
    }

    /// An HTTP-backed search configured from `config`.
    pub fn from_config(config: &FinderConfig) -> Result<Self, FinderError> {
        config.validate()?;
        let service = HttpQueryService::new(
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )?;
        Self::with_service(Arc::new(service), config.worker_threads)
    }

    pub fn executor(&self) -> &RoleExecutor {
        &self.executor
    }

    /// Run a derivation with the endpoint, dataset and threshold from `config`.
    pub fn derive_with_config(
        &self,
        seed: &str,
        config: &FinderConfig,
    ) -> Result<Derivation, FinderError> {
        self.derive_candidate_triples(
            seed,
            &config.endpoint,
            config.dataset.as_deref(),
            config.threshold,
        )
    }

    /// Expand `seed` until `threshold` entries are accepted or nothing is left.
    ///
    /// Any fatal error aborts the derivation; partial results are discarded
    /// and the cause is wrapped in [`FinderError::DerivationFailed`].
    pub fn derive_candidate_triples(
        &self,
        seed: &str,
        endpoint: &str,
        dataset: Option<&str>,
        threshold: usize,
    ) -> Result<Derivation, FinderError> {
        self.expand(seed, endpoint, dataset, threshold)
            .map_err(|cause| {
                tracing::error!(
                    seed = %seed,
                    endpoint = %endpoint,
                    error = %cause,
                    "triple derivation failed"
                );
                FinderError::derivation(seed, endpoint, dataset, cause)
            })
    }

    fn expand(
        &self,
        seed: &str,
        endpoint: &str,
        dataset: Option<&str>,
        threshold: usize,
    ) -> Result<Derivation, FinderError> {
        let endpoint = Endpoint::parse(endpoint)?;
        let seed_key = canonicalize(seed);

        let mut queue: DedupQueue<FrontierEntry> = DedupQueue::new();
        let mut accepted: Vec<FrontierEntry> = Vec::new();
        let mut expanded: HashSet<String> = HashSet::new();
        let mut expanded_terms: Vec<String> = Vec::new();

        if threshold > 0 {
            let found = self
                .executor
                .derive_triples(seed, &endpoint, dataset, threshold)?;
            expanded.insert(seed_key.clone());
            expanded_terms.push(seed.to_string());
            queue.enqueue_all(found.into_iter().map(|t| FrontierEntry::new(seed, t)));
        }

        while accepted.len() < threshold {
            let Some(entry) = queue.dequeue() else {
                break;
            };
            let terms = entry.triple.canonical_terms();
            accepted.push(entry);

            let remaining = threshold - accepted.len();
            if remaining == 0 {
                break;
            }

            for term in terms {
                // The seed's own neighbourhood is already queued.
                if term == seed_key || !is_expandable(&term) || !expanded.insert(term.clone()) {
                    continue;
                }

                let found = self
                    .executor
                    .derive_triples(&term, &endpoint, dataset, remaining)?;
                tracing::debug!(
                    term = %term,
                    remaining,
                    discovered = found.len(),
                    "expanded frontier term"
                );
                queue.enqueue_all(
                    found
                        .into_iter()
                        .map(|t| FrontierEntry::new(term.as_str(), t)),
                );
                expanded_terms.push(term);
            }
        }

        let termination = if accepted.len() >= threshold {
            Termination::BudgetExhausted
        } else {
            Termination::FrontierExhausted
        };

        tracing::info!(
            seed = %seed,
            endpoint = %endpoint,
            accepted = accepted.len(),
            expansions = expanded_terms.len(),
            termination = termination.as_str(),
            "triple derivation finished"
        );

        Ok(Derivation {
            seed: seed.to_string(),
            entries: accepted,
            termination,
            expanded_terms,
        })
    }
}

/// Blank-node labels are local to one response and cannot be queried back.
fn is_expandable(term: &str) -> bool {
    !term.trim().is_empty() && !term.starts_with("_:")
}
