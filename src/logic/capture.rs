//! Landing-page typing shortcut.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, PageMode};

/// What: Extract the character a key event would type, if it is a plain printable key.
///
/// Inputs:
/// - `ke`: Key event from the terminal.
///
/// Output:
/// - `Some(ch)` for a single printable character typed without Control, Alt or Super;
///   `None` for navigation/function keys and modified combinations.
///
/// Details:
/// - Shift is allowed since it is how uppercase letters and symbols are typed.
#[must_use]
pub fn printable_char(ke: &KeyEvent) -> Option<char> {
    let blocking =
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;
    if ke.modifiers.intersects(blocking) {
        return None;
    }
    match ke.code {
        KeyCode::Char(ch) if !ch.is_control() => Some(ch),
        _ => None,
    }
}

/// What: Apply the landing shortcut: a typed character opens the input view pre-filled with it.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `ke`: Key event to inspect.
///
/// Output:
/// - `true` when the event was consumed; `false` lets normal key handling proceed.
///
/// Details:
/// - Active only on the landing view, with the page scrolled to the top and the menu closed.
/// - The prompt becomes exactly the typed character and the caret sits after it.
pub fn capture_landing_keystroke(app: &mut AppState, ke: &KeyEvent) -> bool {
    if app.page != PageMode::Landing || app.menu_open || !app.landing_at_top() {
        return false;
    }
    let Some(ch) = printable_char(ke) else {
        return false;
    };
    app.input = ch.to_string();
    app.caret = 1;
    app.page = PageMode::Input;
    tracing::debug!(key = %ch, "landing keystroke captured; switching to input view");
    true
}
