use crate::{Repository, RepositoryId, ViewState};

use super::MISSING_DESCRIPTION_FALLBACK;

/// Message shown while the detail fetch is in flight.
pub const DETAIL_LOADING_MESSAGE: &str = "Loading repository details...";

/// Message shown when the detail fetch fails, whatever the cause.
pub const DETAIL_FAILURE_MESSAGE: &str =
    "Failed to fetch repository details. Please try again later.";

/// Detail text when a repository has no primary language. Intentionally
/// distinct from the list view's fallback.
pub const DETAIL_MISSING_LANGUAGE_FALLBACK: &str = "N/A";

/// Message shown when the fetch succeeds with a null body. A valid display
/// state, distinct from `Failure`.
pub const NOT_FOUND_MESSAGE: &str = "Repository not found";

/// State owned by the detail view.
#[derive(Debug, Default)]
pub struct DetailViewState {
    /// The identifier extracted from the current route.
    pub id: RepositoryId,

    /// Fetch lifecycle holding the repository, or `None` for a null body.
    pub state: ViewState<Option<Repository>>,
}

impl DetailViewState {
    /// Fresh state entering `Loading`, as produced by every activation and
    /// every id change.
    pub fn loading(id: RepositoryId) -> Self {
        Self {
            id,
            state: ViewState::Loading,
        }
    }

    /// The details to render, when the fetch resolved with a repository.
    pub fn details(&self) -> Option<RepositoryDetails> {
        match self.state.success() {
            Some(Some(repository)) => Some(RepositoryDetails::from(repository)),
            _ => None,
        }
    }

    /// Whether the fetch resolved with a null body.
    pub fn is_not_found(&self) -> bool {
        matches!(self.state.success(), Some(None))
    }

    /// The external URL of the displayed repository.
    pub fn external_url(&self) -> Option<&str> {
        match self.state.success() {
            Some(Some(repository)) => Some(repository.html_url()),
            _ => None,
        }
    }
}

/// Everything the detail panel displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDetails {
    /// The repository name.
    pub name: String,
    /// The full repository name.
    pub full_name: String,
    /// The description, or the fixed fallback text.
    pub description: String,
    /// The primary language, or the fixed fallback text.
    pub language: String,
    /// The star count, zero included.
    pub stars: String,
    /// The fork count, zero included.
    pub forks: String,
    /// The watcher count, zero included.
    pub watchers: String,
    /// The open issue count, zero included.
    pub open_issues: String,
    /// The outbound URL of the repository.
    pub html_url: String,
}

impl From<&Repository> for RepositoryDetails {
    fn from(repository: &Repository) -> Self {
        Self {
            name: repository.name().to_string(),
            full_name: repository.full_name().to_string(),
            description: repository
                .description_or(MISSING_DESCRIPTION_FALLBACK)
                .to_string(),
            language: repository
                .language_or(DETAIL_MISSING_LANGUAGE_FALLBACK)
                .to_string(),
            stars: repository.stargazers_count().to_string(),
            forks: repository.forks_count().to_string(),
            watchers: repository.watchers_count().to_string(),
            open_issues: repository.open_issues_count().to_string(),
            html_url: repository.html_url().to_string(),
        }
    }
}
