//! Landing view key handling (typing shortcut, menu key, page scrolling).

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{capture_landing_keystroke, open_menu, scroll_landing, scroll_landing_to};
use crate::state::AppState;
use crate::theme::matches_any;

/// Rows moved by a page-wise scroll key.
const PAGE_ROWS: i32 = 10;

/// What: Handle a key press on the landing view (menu closed).
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable view state.
///
/// Details:
/// - The typing shortcut gets the first look; keys it does not consume scroll the page or
///   open the menu.
pub(super) fn handle_landing_key(ke: KeyEvent, app: &mut AppState) {
    if capture_landing_keystroke(app, &ke) {
        return;
    }
    if matches_any(&app.settings.keymap.menu_open, ke.code, ke.modifiers) {
        open_menu(app);
        return;
    }
    match ke.code {
        KeyCode::Up => scroll_landing(app, -1),
        KeyCode::Down => scroll_landing(app, 1),
        KeyCode::PageUp => scroll_landing(app, -PAGE_ROWS),
        KeyCode::PageDown => scroll_landing(app, PAGE_ROWS),
        KeyCode::Home => scroll_landing_to(app, false),
        KeyCode::End => scroll_landing_to(app, true),
        _ => {}
    }
}
