use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The identifier of a repository.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepositoryId(pub u64);

impl Deref for RepositoryId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a repository as returned by the API.
///
/// Deserialization is lenient: a missing or null field takes its default and
/// surfaces later as a rendering fallback, never as a fetch error.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The unique, stable identifier of the repository.
    #[serde(default)]
    id: RepositoryId,

    /// The name of the repository.
    #[serde(default)]
    name: String,

    /// The full name of the repository, including its owner.
    #[serde(default)]
    full_name: String,

    /// The description of the repository, if any.
    #[serde(default)]
    description: Option<String>,

    /// The external URL of the repository.
    #[serde(default)]
    html_url: String,

    /// The primary language of the repository, if any.
    #[serde(default)]
    language: Option<String>,

    /// The number of forks the repository has.
    #[serde(default)]
    forks_count: u32,

    /// The number of open issues the repository has.
    #[serde(default)]
    open_issues_count: u32,

    /// The number of watchers the repository has.
    #[serde(default)]
    watchers_count: u32,

    /// The number of stars the repository has.
    #[serde(default)]
    stargazers_count: u32,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(
        id: u64,
        name: &str,
        full_name: &str,
        description: Option<&str>,
        html_url: &str,
        language: Option<&str>,
        forks_count: u32,
        open_issues_count: u32,
        watchers_count: u32,
        stargazers_count: u32,
    ) -> Self {
        Self {
            id: RepositoryId(id),
            name: name.to_string(),
            full_name: full_name.to_string(),
            description: description.map(ToString::to_string),
            html_url: html_url.to_string(),
            language: language.map(ToString::to_string),
            forks_count,
            open_issues_count,
            watchers_count,
            stargazers_count,
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Retrieves the full repository name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Retrieves the description, or `fallback` when it is absent or empty.
    pub fn description_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => fallback,
        }
    }

    /// Retrieves the external URL of the repository.
    pub fn html_url(&self) -> &str {
        &self.html_url
    }

    /// Retrieves the primary language, or `fallback` when it is absent or empty.
    pub fn language_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.language.as_deref() {
            Some(language) if !language.is_empty() => language,
            _ => fallback,
        }
    }

    /// Retrieves the number of forks.
    pub fn forks_count(&self) -> u32 {
        self.forks_count
    }

    /// Retrieves the number of open issues.
    pub fn open_issues_count(&self) -> u32 {
        self.open_issues_count
    }

    /// Retrieves the number of watchers.
    pub fn watchers_count(&self) -> u32 {
        self.watchers_count
    }

    /// Retrieves the number of stars.
    pub fn stargazers_count(&self) -> u32 {
        self.stargazers_count
    }

    /// Creates a dummy `Repository` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy(id: u64, name: &str) -> Self {
        Self::new(
            id,
            name,
            &format!("org/{name}"),
            Some(&format!("Description of {name}")),
            &format!("https://example.com/org/{name}"),
            Some("Rust"),
            3,
            1,
            5,
            8,
        )
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {} ({}), Stars: {}",
            self.full_name, self.id, self.stargazers_count
        )
    }
}
