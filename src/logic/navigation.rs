//! Page transitions, the navigation menu and landing scrolling.

use crate::state::{AppState, NavSection, PageMode};

/// What: Return from the input view to the landing view.
///
/// Inputs:
/// - `app`: Mutable view state.
///
/// Output:
/// - None (page is `Landing`, prompt empty, `loading`/`results_visible` cleared).
///
/// Details:
/// - Unconditional, whatever the prior state.
/// - Advances the curation generation so a pending completion cannot resurrect results.
/// - The landing page is shown from the top again.
pub fn go_to_landing(app: &mut AppState) {
    app.page = PageMode::Landing;
    app.input.clear();
    app.caret = 0;
    app.loading = false;
    app.results_visible = false;
    app.curation_generation += 1;
    app.landing_scroll = 0;
    app.results_scroll = 0;
    tracing::debug!("returned to landing view");
}

/// Open the slide-in navigation menu with the first entry highlighted.
pub fn open_menu(app: &mut AppState) {
    app.menu_open = true;
    app.menu_selected = 0;
    tracing::debug!("menu opened");
}

/// Close the navigation menu.
pub fn close_menu(app: &mut AppState) {
    app.menu_open = false;
    tracing::debug!("menu closed");
}

/// What: Follow a navigation entry.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `section`: Entry that was activated.
///
/// Output:
/// - None (menu closed; landing scrolled to the section when on the landing view).
///
/// Details:
/// - Sections only exist on the landing page; on the input view the entry just closes the menu.
pub fn activate_nav(app: &mut AppState, section: NavSection) {
    app.menu_open = false;
    if app.page == PageMode::Landing {
        app.landing_scroll = app.anchor_of(section).min(app.landing_max_scroll);
    }
    tracing::debug!(section = section.anchor(), "navigation entry activated");
}

/// Move the menu highlight by `delta`, wrapping around the three entries.
pub const fn move_menu_selection(app: &mut AppState, delta: isize) {
    let len = NavSection::ALL.len().cast_signed();
    let next = (app.menu_selected.cast_signed() + delta).rem_euclid(len);
    app.menu_selected = next.cast_unsigned();
}

/// Move `current` by `delta`, clamped to `0..=max`.
fn clamped_offset(current: u16, delta: i32, max: u16) -> u16 {
    let target = i32::from(current).saturating_add(delta);
    u16::try_from(target.clamp(0, i32::from(max))).unwrap_or(0)
}

/// What: Scroll the landing page by a signed number of rows.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `delta`: Rows to move; negative scrolls up.
///
/// Output:
/// - None (offset clamped to `0..=landing_max_scroll`).
pub fn scroll_landing(app: &mut AppState, delta: i32) {
    app.landing_scroll = clamped_offset(app.landing_scroll, delta, app.landing_max_scroll);
}

/// Jump the landing page to the top (`to_end == false`) or the bottom.
pub const fn scroll_landing_to(app: &mut AppState, to_end: bool) {
    app.landing_scroll = if to_end { app.landing_max_scroll } else { 0 };
}

/// What: Scroll the results grid by a signed number of card rows.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `delta`: Card rows to move; negative scrolls up.
///
/// Output:
/// - None (offset clamped to `0..=results_max_scroll`).
///
/// Details:
/// - The maximum comes from the last render, so narrow terminals that fit fewer
///   cards get a longer scroll range.
pub fn scroll_results(app: &mut AppState, delta: i32) {
    app.results_scroll = clamped_offset(app.results_scroll, delta, app.results_max_scroll);
}
