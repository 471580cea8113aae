//! Key handling while the navigation menu is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{activate_nav, close_menu, move_menu_selection};
use crate::state::{AppState, NavSection};
use crate::theme::matches_any;

/// What: Handle a key press while the navigation menu is open.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable view state.
///
/// Details:
/// - The menu consumes every key: close binding, Up/Down highlight, Enter or `1`-`3` follow
///   an entry. Other keys do nothing.
pub(super) fn handle_menu_key(ke: KeyEvent, app: &mut AppState) {
    if matches_any(&app.settings.keymap.menu_close, ke.code, ke.modifiers) {
        close_menu(app);
        return;
    }
    match ke.code {
        KeyCode::Up => move_menu_selection(app, -1),
        KeyCode::Down => move_menu_selection(app, 1),
        KeyCode::Enter => {
            if let Some(section) = NavSection::from_index(app.menu_selected) {
                activate_nav(app, section);
            }
        }
        KeyCode::Char(ch @ '1'..='3') => {
            let idx = (ch as usize) - ('1' as usize);
            if let Some(section) = NavSection::from_index(idx) {
                activate_nav(app, section);
            }
        }
        _ => {}
    }
}
