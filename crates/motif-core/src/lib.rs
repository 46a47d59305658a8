//! Motif core model
//!
//! I/O-free building blocks for deriving the triples that connect an example
//! term to a knowledge graph, and for turning those triples into candidate
//! query hypotheses:
//!
//! - [`triple`]: canonical triples and frontier entries,
//! - [`dedup_queue`]: the admit-once FIFO the frontier search runs on,
//! - [`combination`], [`connectivity`], [`grouping`]: candidate pattern assembly,
//! - [`hypothesis`]: basic graph patterns and best-first search states,
//! - [`repository`]: the motif/property storage boundary.
//!
//! Everything that talks to a SPARQL endpoint lives in `motif-sparql`.

pub mod combination;
pub mod connectivity;
pub mod dedup_queue;
pub mod grouping;
pub mod hypothesis;
pub mod repository;
pub mod triple;

pub use dedup_queue::DedupQueue;
pub use hypothesis::{
    BasicGraphPattern, HypothesisFrontier, LabeledBinding, SearchPolicy, SearchState,
};
pub use repository::{InMemoryMotifRepository, Motif, MotifRepository, Property, RepositoryError};
pub use triple::{canonicalize, FrontierEntry, Role, Triple};
