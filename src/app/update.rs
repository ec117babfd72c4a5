use log::{debug, error};

use crate::{Repository, RepositoryId, Route, StdResult, ViewState};

use super::{
    AppState, DETAIL_FAILURE_MESSAGE, DetailViewState, FetchKey, InputKey, LIST_FAILURE_MESSAGE,
    ListViewState, Message,
};

/// Actions the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the list fetch under `key`.
    FetchList {
        /// The key of the activation spawning the fetch.
        key: FetchKey,
    },

    /// Spawn the detail fetch for `id` under `key`.
    FetchDetail {
        /// The key of the activation spawning the fetch.
        key: FetchKey,
        /// The repository to fetch.
        id: RepositoryId,
    },

    /// Open `url` in the system browser, detached.
    OpenExternal {
        /// The outbound URL.
        url: String,
    },

    /// Leave the event loop.
    Quit,
}

/// Applies one message to the state and returns the actions to perform.
pub fn update(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    match message {
        Message::Navigate(path) => navigate(state, &path),
        Message::ListFetched { key, result } => {
            apply_list_result(state, key, result);
            vec![]
        }
        Message::DetailFetched { key, result } => {
            apply_detail_result(state, key, result);
            vec![]
        }
        Message::Key(key) => handle_key(state, key),
        Message::Redraw => vec![],
        Message::Quit => vec![UpdateAction::Quit],
    }
}

/// Activates the route for `path` and spawns its fetch under a fresh key.
///
/// This is the only transition that enters `Loading`, and the only way out of
/// `Success` or `Failure`.
fn navigate(state: &mut AppState, path: &str) -> Vec<UpdateAction> {
    let route = Route::parse(path);
    debug!("Navigating to {route} (from path {path})");
    state.route = route;
    state.key = state.key.next();
    match route {
        Route::List => {
            state.list = ListViewState::loading();
            vec![UpdateAction::FetchList { key: state.key }]
        }
        Route::Detail { id } => {
            state.detail = DetailViewState::loading(id);
            vec![UpdateAction::FetchDetail { key: state.key, id }]
        }
    }
}

fn apply_list_result(state: &mut AppState, key: FetchKey, result: StdResult<Vec<Repository>>) {
    if key != state.key {
        debug!("Discarding stale list response for {key:?} (current {:?})", state.key);
        return;
    }
    state.list.state = match result {
        Ok(repositories) => ViewState::Success(repositories),
        Err(error) => {
            error!("Failed to fetch repositories: {error:?}");
            ViewState::Failure(LIST_FAILURE_MESSAGE.to_string())
        }
    };
}

fn apply_detail_result(
    state: &mut AppState,
    key: FetchKey,
    result: StdResult<Option<Repository>>,
) {
    if key != state.key {
        debug!("Discarding stale detail response for {key:?} (current {:?})", state.key);
        return;
    }
    state.detail.state = match result {
        Ok(repository) => ViewState::Success(repository),
        Err(error) => {
            error!("Failed to fetch repository {}: {error:?}", state.detail.id);
            ViewState::Failure(DETAIL_FAILURE_MESSAGE.to_string())
        }
    };
}

fn handle_key(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    match (state.route, key) {
        (_, InputKey::Char('q')) => vec![UpdateAction::Quit],
        (Route::List, InputKey::Up | InputKey::Char('k')) => {
            state.list.select_previous();
            vec![]
        }
        (Route::List, InputKey::Down | InputKey::Char('j')) => {
            state.list.select_next();
            vec![]
        }
        (Route::List, InputKey::Enter) => match state.list.selected_id() {
            Some(id) => navigate(state, &Route::Detail { id }.to_path()),
            None => vec![],
        },
        (Route::Detail { .. }, InputKey::Esc | InputKey::Backspace | InputKey::Char('b')) => {
            navigate(state, &Route::List.to_path())
        }
        (Route::Detail { .. }, InputKey::Char('o')) => match state.detail.external_url() {
            Some(url) => vec![UpdateAction::OpenExternal {
                url: url.to_string(),
            }],
            None => vec![],
        },
        _ => vec![],
    }
}
