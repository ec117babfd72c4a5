use crate::{Repository, RepositoryId, StdResult};

/// A trait for fetching repository data from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches every repository exposed by the API, in API order.
    async fn fetch_all(&self) -> StdResult<Vec<Repository>>;

    /// Fetches a single repository by identifier.
    ///
    /// Resolves to `None` when the API answers with a null body.
    async fn fetch_one(&self, id: RepositoryId) -> StdResult<Option<Repository>>;
}
