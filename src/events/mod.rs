//! Event handling layer for Curate's TUI.
//!
//! `handle_event` dispatches terminal input: the open menu first, then the
//! view-specific handlers, with mouse handling delegated to its own module.

use crossterm::event::{Event as CEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, CurationRequest, PageMode};
use crate::theme::matches_any;

mod input;
mod landing;
mod menu;
mod mouse;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    curation_tx: &mpsc::UnboundedSender<CurationRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if matches_any(&app.settings.keymap.quit, ke.code, ke.modifiers) {
                tracing::info!("quit requested");
                return true;
            }
            if app.menu_open {
                menu::handle_menu_key(ke, app);
                return false;
            }
            match app.page {
                PageMode::Landing => landing::handle_landing_key(ke, app),
                PageMode::Input => input::handle_input_key(ke, app, curation_tx),
            }
            false
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app);
            false
        }
        _ => false,
    }
}
