//! Motif SPARQL frontier search
//!
//! Derives the triples that connect an example term to a remote knowledge
//! graph. For each term three role queries are issued (term as subject, as
//! predicate, as object); every term discovered in the answers is expanded in
//! turn until a global result budget is used up or nothing new turns up.
//!
//! ```text
//! FrontierSearch ──► RoleExecutor ──► RemoteQueryClient ──► QueryService
//!   (sequential)      (rayon fan-out)   (rows → triples)     (HTTP / in-memory)
//! ```
//!
//! Failure policy:
//! - a role query the endpoint rejects is logged and contributes nothing;
//! - an unreachable endpoint aborts the whole derivation.
//!
//! ```no_run
//! use motif_sparql::{FinderConfig, FrontierSearch};
//!
//! let config = FinderConfig::from_env()?;
//! let search = FrontierSearch::from_config(&config)?;
//! let derivation = search.derive_with_config("http://dbpedia.org/resource/Berlin", &config)?;
//! println!("{} triples", derivation.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod finder;
pub mod memory;
pub mod query;
pub mod results;
pub mod service;

pub use client::RemoteQueryClient;
pub use config::{ConfigError, FinderConfig};
pub use endpoint::{is_url, wrap_term, Endpoint};
pub use error::{FinderError, QueryError};
pub use executor::{role_pool, RoleExecutor};
pub use finder::{Derivation, FrontierSearch, Termination};
pub use memory::InMemoryEndpoint;
pub use query::{RoleQueries, RoleQuery, SolutionRow};
pub use service::{HttpQueryService, QueryService};
