//! Mouse handling: menu icon, menu entries, back arrow and wheel scrolling.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::{
    activate_nav, close_menu, go_to_landing, open_menu, scroll_landing, scroll_results,
};
use crate::state::{AppState, NavSection, PageMode, Rect4};

/// Rows moved per wheel notch on the landing page.
const WHEEL_ROWS: i32 = 3;

fn hit(rect: Option<Rect4>, mx: u16, my: u16) -> bool {
    rect.is_some_and(|(x, y, width, height)| {
        mx >= x && mx < x + width && my >= y && my < y + height
    })
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Mutable view state (rects recorded by the last render).
///
/// Details:
/// - Menu-first: while open, clicks on the close control or an entry act; others are ignored.
/// - Landing: click on the menu icon opens the menu; the wheel scrolls the page.
/// - Input: click on the back arrow returns to landing; the wheel scrolls the results
///   one card row per notch.
pub(super) fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    let (mx, my) = (m.column, m.row);
    let is_left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));

    if app.menu_open {
        if !is_left_down {
            return;
        }
        if hit(app.menu_close_rect, mx, my) {
            close_menu(app);
            return;
        }
        if let Some(section) = NavSection::ALL
            .into_iter()
            .find(|s| hit(app.nav_rects[s.index()], mx, my))
        {
            activate_nav(app, section);
        }
        return;
    }

    match (app.page, m.kind) {
        (PageMode::Landing, MouseEventKind::ScrollUp) => scroll_landing(app, -WHEEL_ROWS),
        (PageMode::Landing, MouseEventKind::ScrollDown) => scroll_landing(app, WHEEL_ROWS),
        (PageMode::Input, MouseEventKind::ScrollUp) => scroll_results(app, -1),
        (PageMode::Input, MouseEventKind::ScrollDown) => scroll_results(app, 1),
        (PageMode::Landing, _) if is_left_down && hit(app.menu_button_rect, mx, my) => {
            open_menu(app);
        }
        (PageMode::Input, _) if is_left_down && hit(app.back_button_rect, mx, my) => {
            go_to_landing(app);
        }
        _ => {}
    }
}
