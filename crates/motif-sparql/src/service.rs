//! Query execution seam.
//!
//! [`QueryService`] is the only place the search touches the network. The HTTP
//! implementation speaks the SPARQL 1.1 protocol (GET with `query=`); offline
//! runs and tests use [`crate::memory::InMemoryEndpoint`].

use crate::endpoint::Endpoint;
use crate::error::{FinderError, QueryError};
use crate::query::{RoleQuery, SolutionRow};
use crate::results::{classify_status, parse_results, SPARQL_RESULTS_JSON};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;

pub trait QueryService: Send + Sync {
    /// Run one role query and return its solution rows.
    fn select(&self, endpoint: &Endpoint, query: &RoleQuery)
        -> Result<Vec<SolutionRow>, QueryError>;
}

/// SPARQL protocol client over blocking HTTP.
#[derive(Debug, Clone)]
pub struct HttpQueryService {
    client: Client,
}

impl HttpQueryService {
    /// Build a client with a per-request timeout.
    ///
    /// A request that times out is reported as unavailable.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FinderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).unwrap_or_else(|_| HeaderValue::from_static("motif")),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(SPARQL_RESULTS_JSON));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FinderError::Setup(format!("failed to build http client: {e}")))?;
        Ok(Self { client })
    }
}

impl QueryService for HttpQueryService {
    fn select(
        &self,
        endpoint: &Endpoint,
        query: &RoleQuery,
    ) -> Result<Vec<SolutionRow>, QueryError> {
        let sparql = query.to_sparql();
        let resp = self
            .client
            .get(endpoint.url().clone())
            .query(&[("query", sparql.as_str())])
            .send()
            .map_err(|e| QueryError::Unavailable(format!("failed to reach {endpoint}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(classify_status(status.as_u16(), &text));
        }

        let body = resp.text().map_err(|e| {
            QueryError::Unavailable(format!("failed to read response from {endpoint}: {e}"))
        })?;
        parse_results(&body)
    }
}
