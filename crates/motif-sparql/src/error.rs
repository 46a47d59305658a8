//! Error taxonomy for endpoint access and frontier derivation.

use motif_core::Role;

/// Failure of one query against an endpoint, as reported by a [`crate::QueryService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The endpoint rejected or could not answer this particular query.
    #[error("malformed query: {0}")]
    Malformed(String),
    /// The endpoint could not be reached (network, I/O, timeout, overload).
    #[error("endpoint unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("malformed {role} query: {message}")]
    MalformedQuery { role: Role, message: String },

    #[error("endpoint '{endpoint}' unavailable: {message}")]
    EndpointUnavailable { endpoint: String, message: String },

    #[error(
        "failed to derive triples for '{seed}' from '{endpoint}'{}: {source}; check the endpoint URL and dataset parameters",
        dataset_suffix(.dataset)
    )]
    DerivationFailed {
        seed: String,
        endpoint: String,
        dataset: Option<String>,
        #[source]
        source: Box<FinderError>,
    },

    #[error("failed to set up query client: {0}")]
    Setup(String),
}

fn dataset_suffix(dataset: &Option<String>) -> String {
    match dataset {
        Some(d) => format!(" (dataset '{d}')"),
        None => String::new(),
    }
}

impl FinderError {
    pub fn derivation(
        seed: &str,
        endpoint: &str,
        dataset: Option<&str>,
        cause: FinderError,
    ) -> Self {
        FinderError::DerivationFailed {
            seed: seed.to_string(),
            endpoint: endpoint.to_string(),
            dataset: dataset.map(str::to_string),
            source: Box::new(cause),
        }
    }

    /// The innermost error for wrapped derivation failures.
    pub fn root_cause(&self) -> &FinderError {
        match self {
            FinderError::DerivationFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
