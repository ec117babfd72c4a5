use crate::{Repository, StdResult};

use super::FetchKey;

/// A key press translated from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// A printable character.
    Char(char),
}

/// All messages processed by the update loop.
#[derive(Debug)]
pub enum Message {
    /// Keyboard input.
    Key(InputKey),

    /// Client-side navigation to a path, without reload.
    Navigate(String),

    /// Resolution of the list fetch spawned under `key`.
    ListFetched {
        /// The key of the activation that spawned the fetch.
        key: FetchKey,
        /// The repositories, or the error to map to the fixed failure message.
        result: StdResult<Vec<Repository>>,
    },

    /// Resolution of the detail fetch spawned under `key`.
    DetailFetched {
        /// The key of the activation that spawned the fetch.
        key: FetchKey,
        /// The repository (`None` for a null body), or the error to map to
        /// the fixed failure message.
        result: StdResult<Option<Repository>>,
    },

    /// The terminal was resized; re-render only.
    Redraw,

    /// Leave the application.
    Quit,
}
