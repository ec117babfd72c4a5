use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::{Repository, RepositoryFetcher, RepositoryId, StdResult};

/// The default base endpoint of the repository API.
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8080/api";

const LIST_REQUEST_FAILED: &str = "Failed to fetch repositories";
const DETAIL_REQUEST_FAILED: &str = "Failed to fetch repository";

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// The API answered with a non-success status.
    #[error("{message} (status {status})")]
    RequestFailed {
        /// The HTTP status of the response.
        status: StatusCode,
        /// A fixed human-readable message naming the failed operation.
        message: &'static str,
    },

    /// The request never produced a response; wraps the network error unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Fetches repository data from the REST API.
#[derive(Debug)]
pub struct RestFetcher {
    client: Client,
    endpoint: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` against the given base endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        Url::parse(endpoint).with_context(|| format!("Invalid API endpoint: {endpoint}"))?;
        let client = Client::builder()
            .user_agent(concat!("repo-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Issues one GET and parses the body, with no schema validation beyond
    /// lenient deserialization.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        message: &'static str,
    ) -> Result<T, FetcherError> {
        let url = format!("{}/{path}", self.endpoint);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetcherError::RequestFailed { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch_all(&self) -> StdResult<Vec<Repository>> {
        Ok(self.get_json("repositories", LIST_REQUEST_FAILED).await?)
    }

    async fn fetch_one(&self, id: RepositoryId) -> StdResult<Option<Repository>> {
        Ok(self
            .get_json(&format!("repositories/{id}"), DETAIL_REQUEST_FAILED)
            .await?)
    }
}
