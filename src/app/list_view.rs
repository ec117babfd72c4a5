use crate::{Repository, RepositoryId, ViewState};

/// Message shown while the list fetch is in flight.
pub const LIST_LOADING_MESSAGE: &str = "Loading repositories...";

/// Message shown when the list fetch fails, whatever the cause.
pub const LIST_FAILURE_MESSAGE: &str = "Failed to fetch repositories. Please try again later.";

/// Card text when a repository has no description.
pub const MISSING_DESCRIPTION_FALLBACK: &str = "No description available";

/// Card text when a repository has no primary language.
pub const LIST_MISSING_LANGUAGE_FALLBACK: &str = "Unknown";

/// State owned by the list view.
#[derive(Debug, Default)]
pub struct ListViewState {
    /// Fetch lifecycle holding the repositories in API order.
    pub state: ViewState<Vec<Repository>>,

    /// Cursor position within the cards.
    pub selected: usize,
}

impl ListViewState {
    /// Fresh state entering `Loading`, as produced by every activation.
    pub fn loading() -> Self {
        Self {
            state: ViewState::Loading,
            selected: 0,
        }
    }

    /// The repositories to render, one card each, in API order.
    pub fn repositories(&self) -> &[Repository] {
        self.state.success().map(Vec::as_slice).unwrap_or_default()
    }

    /// The identifier of the repository under the cursor.
    pub fn selected_id(&self) -> Option<RepositoryId> {
        self.repositories().get(self.selected).map(Repository::id)
    }

    /// Moves the cursor one card up, clamped to the first card.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the cursor one card down, clamped to the last card.
    pub fn select_next(&mut self) {
        let count = self.repositories().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// The cards to render, in API order.
    pub fn cards(&self) -> Vec<RepositoryCard> {
        self.repositories().iter().map(RepositoryCard::from).collect()
    }
}

/// Everything one list card displays.
///
/// Fallbacks are applied here, so rendering is plain text substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryCard {
    /// The repository name.
    pub name: String,
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
}

impl From<&Repository> for RepositoryCard {
    fn from(repository: &Repository) -> Self {
        Self {
            name: repository.name().to_string(),
            description: repository
                .description_or(MISSING_DESCRIPTION_FALLBACK)
                .to_string(),
            language: repository
                .language_or(LIST_MISSING_LANGUAGE_FALLBACK)
                .to_string(),
            stars: repository.stargazers_count().to_string(),
            forks: repository.forks_count().to_string(),
            watchers: repository.watchers_count().to_string(),
            open_issues: repository.open_issues_count().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(repositories: Vec<Repository>) -> ListViewState {
        ListViewState {
            state: ViewState::Success(repositories),
            selected: 0,
        }
    }

    mod list_view_state {
        use super::*;

        #[test]
        fn one_card_per_fetched_repository() {
            let view = loaded(vec![
                Repository::dummy(1, "repository-1"),
                Repository::dummy(2, "repository-2"),
                Repository::dummy(3, "repository-3"),
            ]);

            assert_eq!(3, view.cards().len());
        }

        #[test]
        fn cards_keep_api_order() {
            let view = loaded(vec![
                Repository::dummy(9, "repository-9"),
                Repository::dummy(1, "repository-1"),
            ]);

            let names = view
                .cards()
                .into_iter()
                .map(|card| card.name)
                .collect::<Vec<_>>();

            assert_eq!(vec!["repository-9", "repository-1"], names);
        }

        #[test]
        fn no_cards_while_loading_or_failed() {
            assert!(ListViewState::loading().cards().is_empty());

            let failed = ListViewState {
                state: ViewState::Failure(LIST_FAILURE_MESSAGE.to_string()),
                selected: 0,
            };
            assert!(failed.cards().is_empty());
        }

        #[test]
        fn selection_moves_and_clamps() {
            let mut view = loaded(vec![
                Repository::dummy(1, "repository-1"),
                Repository::dummy(2, "repository-2"),
            ]);

            view.select_previous();
            assert_eq!(0, view.selected);

            view.select_next();
            assert_eq!(1, view.selected);

            view.select_next();
            assert_eq!(1, view.selected);

            view.select_previous();
            assert_eq!(0, view.selected);
        }

        #[test]
        fn selected_id_follows_the_cursor() {
            let mut view = loaded(vec![
                Repository::dummy(1, "repository-1"),
                Repository::dummy(7, "repository-7"),
            ]);

            view.select_next();

            assert_eq!(Some(RepositoryId(7)), view.selected_id());
        }

        #[test]
        fn selected_id_is_none_without_cards() {
            assert_eq!(None, ListViewState::loading().selected_id());
            assert_eq!(None, loaded(vec![]).selected_id());
        }
    }

    mod repository_card {
        use super::*;

        #[test]
        fn card_displays_repository_fields() {
            let card = RepositoryCard::from(&Repository::new(
                1,
                "repository-1",
                "org-1/repository-1",
                Some("A test repository"),
                "https://example.com/org-1/repository-1",
                Some("Rust"),
                5,
                2,
                10,
                15,
            ));

            assert_eq!(
                RepositoryCard {
                    name: "repository-1".to_string(),
                    description: "A test repository".to_string(),
                    language: "Rust".to_string(),
                    stars: "15".to_string(),
                    forks: "5".to_string(),
                    watchers: "10".to_string(),
                    open_issues: "2".to_string(),
                },
                card
            );
        }

        #[test]
        fn missing_description_falls_back() {
            let card = RepositoryCard::from(&Repository::new(
                1, "repository-1", "", None, "", Some("Rust"), 0, 0, 0, 0,
            ));

            assert_eq!("No description available", card.description);
        }

        #[test]
        fn missing_language_falls_back_to_unknown() {
            let card = RepositoryCard::from(&Repository::new(
                1,
                "repository-1",
                "",
                Some("A test repository"),
                "",
                None,
                0,
                0,
                0,
                0,
            ));

            assert_eq!("Unknown", card.language);
        }

        #[test]
        fn zero_metrics_render_as_zero() {
            let card = RepositoryCard::from(&Repository::new(
                1, "repository-1", "", None, "", None, 0, 0, 0, 0,
            ));

            assert_eq!("0", card.stars);
            assert_eq!("0", card.forks);
            assert_eq!("0", card.watchers);
            assert_eq!("0", card.open_issues);
        }
    }
}
