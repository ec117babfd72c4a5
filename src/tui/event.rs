use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::{InputKey, Message, StdResult};

/// Converts a crossterm key event to an `InputKey`.
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        _ => None, // Unsupported keys ignored
    }
}

/// Blocks until the next terminal event and translates it to a message.
///
/// Returns `None` for events the application does not react to.
pub fn read() -> StdResult<Option<Message>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(Some(Message::Quit));
            }
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Resize(_, _) => Ok(Some(Message::Redraw)),
        _ => Ok(None),
    }
}
