//! TUI rendering for Curate.
//!
//! `ui` draws the background, the view selected by the page mode, then the
//! navigation menu on top when it is open. Renderers record the hit-test
//! rectangles and landing scroll bounds the event layer relies on.

use ratatui::{Frame, style::Style, widgets::Block};

use crate::state::{AppState, PageMode};

/// Text layout helpers.
pub mod helpers;
/// Prompt entry view with the loading state and results grid.
pub mod input;
/// Scrollable landing page.
pub mod landing;
/// Slide-in navigation panel.
pub mod menu;

/// What: Render one full frame for the current state.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Mutable view state (rects and scroll bounds are refreshed).
///
/// Output:
/// - None.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = app.settings.theme;
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    match app.page {
        PageMode::Landing => {
            app.back_button_rect = None;
            landing::render_landing(f, app, area);
        }
        PageMode::Input => {
            app.menu_button_rect = None;
            input::render_input(f, app, area);
        }
    }

    if app.menu_open {
        menu::render_menu(f, app, area);
    } else {
        app.menu_close_rect = None;
        app.nav_rects = [None; 3];
    }
}
