//! Input view key handling (prompt editing, submit, back, results scrolling).

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::editing::{backspace, caret_to, delete_forward, insert_char, move_caret};
use crate::logic::{go_to_landing, printable_char, scroll_results, submit_curation};
use crate::state::{AppState, CurationRequest};
use crate::theme::matches_any;

/// Card rows moved by PageUp/PageDown in the results grid.
const PAGE_CARD_ROWS: i32 = 2;

/// What: Handle a key press on the input view (menu closed).
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable view state.
/// - `curation_tx`: Channel to the curation delay worker.
///
/// Details:
/// - Enter submits and the back binding returns to landing.
/// - Up/Down and PageUp/PageDown scroll the results grid; everything else edits the prompt.
pub(super) fn handle_input_key(
    ke: KeyEvent,
    app: &mut AppState,
    curation_tx: &mpsc::UnboundedSender<CurationRequest>,
) {
    if matches_any(&app.settings.keymap.back, ke.code, ke.modifiers) {
        go_to_landing(app);
        return;
    }
    match ke.code {
        KeyCode::Enter => {
            submit_curation(app, curation_tx);
        }
        KeyCode::Backspace => backspace(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Left => move_caret(app, -1),
        KeyCode::Right => move_caret(app, 1),
        KeyCode::Home => caret_to(app, false),
        KeyCode::End => caret_to(app, true),
        KeyCode::Up => scroll_results(app, -1),
        KeyCode::Down => scroll_results(app, 1),
        KeyCode::PageUp => scroll_results(app, -PAGE_CARD_ROWS),
        KeyCode::PageDown => scroll_results(app, PAGE_CARD_ROWS),
        _ => {
            if let Some(ch) = printable_char(&ke) {
                insert_char(app, ch);
            }
        }
    }
}
