//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests render whole frames for each view state and check the text on
//! screen plus the hit rectangles and scroll bounds the renderer records.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use curate::logic::mark_image_failed;
use curate::state::{AppState, NavSection, PageMode};
use curate::ui;

fn create_test_app_state() -> AppState {
    let mut app = AppState::default();
    app.clock = "12:34".to_string();
    app
}

fn render_ui_to_backend(width: u16, height: u16, app: &mut AppState) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("failed to create test terminal");
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    terminal
}

/// Flatten the rendered buffer into one string per row.
fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
    screen_rows(terminal).iter().any(|r| r.contains(needle))
}

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn wheel(kind: MouseEventKind) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::empty(),
    })
}

fn left_click(column: u16, row: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
/// What: The landing hero shows the prompt, socials and clock, and records its geometry.
///
/// Inputs:
/// - Default state on an 80x24 terminal.
///
/// Output:
/// - Typing prompt and footer visible; menu icon rect at the top-right; anchors past the hero.
fn landing_renders_hero_and_records_geometry() {
    let mut app = create_test_app_state();
    let terminal = render_ui_to_backend(80, 24, &mut app);

    assert!(screen_contains(&terminal, "S T A R T   T Y P I N G"));
    assert!(screen_contains(&terminal, "@CURATE_AI"));
    let rows = screen_rows(&terminal);
    assert!(rows[23].trim_end().ends_with("12:34"));
    assert!(rows[0].contains('☰'));

    assert_eq!(app.menu_button_rect, Some((77, 0, 3, 1)));
    assert_eq!(app.anchor_of(NavSection::Features), 24);
    assert!(app.landing_max_scroll > app.anchor_of(NavSection::HowItWorks));
    assert!(app.back_button_rect.is_none());
}

#[test]
/// What: Scrolling past the end is clamped and hides the header menu icon.
///
/// Inputs:
/// - Landing scroll offset far beyond the page length.
///
/// Output:
/// - Offset equals the recorded maximum; no menu icon rect; gallery call to action visible.
fn landing_scroll_is_clamped_to_page() {
    let mut app = create_test_app_state();
    app.landing_scroll = u16::MAX;
    let terminal = render_ui_to_backend(80, 24, &mut app);

    assert_eq!(app.landing_scroll, app.landing_max_scroll);
    assert!(app.menu_button_rect.is_none());
    assert!(screen_contains(&terminal, "EXPLORE MORE"));
    assert!(!app.landing_at_top());
}

#[test]
/// What: The empty input view shows the placeholder, the hint and the back arrow.
///
/// Inputs:
/// - Input page with an empty prompt on a 100x30 terminal.
///
/// Output:
/// - Placeholder and hint visible; back rect recorded; landing rects cleared.
fn input_view_shows_placeholder_and_hint() {
    let mut app = create_test_app_state();
    app.page = PageMode::Input;
    let terminal = render_ui_to_backend(100, 30, &mut app);

    assert!(screen_contains(
        &terminal,
        "A futuristic city skyline at dusk, impressionist style..."
    ));
    assert!(screen_contains(&terminal, "Press Enter to curate"));
    assert!(screen_contains(&terminal, "←"));
    assert_eq!(app.back_button_rect, Some((0, 0, 4, 1)));
    assert!(app.menu_button_rect.is_none());
    assert!(!screen_contains(&terminal, "Curating your results..."));
}

#[test]
/// What: The loading state replaces the body with the curating message.
///
/// Inputs:
/// - Input page with a prompt and `loading == true`.
///
/// Output:
/// - Prompt text and loading message visible; no result cards.
fn input_view_shows_loading_message() {
    let mut app = create_test_app_state();
    app.page = PageMode::Input;
    app.input = "neon city".into();
    app.caret = 9;
    app.loading = true;
    let terminal = render_ui_to_backend(100, 30, &mut app);

    assert!(screen_contains(&terminal, "neon city"));
    assert!(screen_contains(&terminal, "Curating your results..."));
    assert!(!screen_contains(&terminal, "Neon Dreams"));
}

#[test]
/// What: Visible results render all eight cards with artist, score and thumbnail URL.
///
/// Inputs:
/// - Input page with `results_visible == true` on a 120x40 terminal (four columns).
///
/// Output:
/// - First and last titles, artist line, match score and indexed URL on screen.
fn input_view_renders_result_grid() {
    let mut app = create_test_app_state();
    app.page = PageMode::Input;
    app.input = "neon city".into();
    app.results_visible = true;
    let terminal = render_ui_to_backend(120, 40, &mut app);

    assert!(screen_contains(&terminal, "Neon Dreams"));
    assert!(screen_contains(&terminal, "Dusk Overdrive"));
    assert!(screen_contains(&terminal, "by J. Harrison"));
    assert!(screen_contains(&terminal, "94% Match"));
    assert!(screen_contains(&terminal, "https://picsum.photos"));
    for i in 0..8 {
        assert!(screen_contains(&terminal, &format!("random={i}")));
    }
    assert!(!screen_contains(&terminal, "Curating your results..."));
    assert_eq!(app.results_max_scroll, 0);
}

#[test]
/// What: On an 80x24 terminal the results grid scrolls by card rows to reach the last card.
///
/// Inputs:
/// - Visible results at 80x24 (three columns, two card rows fit); Down, then wheel up.
///
/// Output:
/// - First render shows "Neon Dreams" and hints at more rows; after Down the last row
///   with "Dusk Overdrive" and its `random=7` URL is on screen; wheel up returns.
fn results_grid_scrolls_to_last_card_on_small_terminal() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = create_test_app_state();
    app.page = PageMode::Input;
    app.input = "neon city".into();
    app.caret = 9;
    app.results_visible = true;
    let terminal = render_ui_to_backend(80, 24, &mut app);

    assert!(screen_contains(&terminal, "Neon Dreams"));
    assert!(!screen_contains(&terminal, "Dusk Overdrive"));
    assert!(screen_contains(&terminal, "↑/↓ for more"));
    assert_eq!(app.results_max_scroll, 1);
    for i in 0..6 {
        assert!(screen_contains(&terminal, &format!("random={i}")));
    }

    assert!(!curate::events::handle_event(
        key(KeyCode::Down),
        &mut app,
        &tx
    ));
    assert_eq!(app.results_scroll, 1);
    let terminal = render_ui_to_backend(80, 24, &mut app);
    assert!(screen_contains(&terminal, "Dusk Overdrive"));
    assert!(screen_contains(&terminal, "random=7"));
    assert!(!screen_contains(&terminal, "Neon Dreams"));
    assert!(!screen_contains(&terminal, "↑/↓ for more"));
    assert_eq!(app.input, "neon city");

    curate::events::handle_event(wheel(MouseEventKind::ScrollUp), &mut app, &tx);
    assert_eq!(app.results_scroll, 0);
    let terminal = render_ui_to_backend(80, 24, &mut app);
    assert!(screen_contains(&terminal, "Neon Dreams"));
}

#[test]
/// What: A failed thumbnail shows the fallback image source on its card only.
///
/// Inputs:
/// - Results visible with card 1 marked as failed.
///
/// Output:
/// - Fallback host on screen exactly once.
fn failed_thumbnail_renders_fallback() {
    let mut app = create_test_app_state();
    app.page = PageMode::Input;
    app.results_visible = true;
    assert!(mark_image_failed(&mut app, 1));
    let terminal = render_ui_to_backend(120, 40, &mut app);

    let hits = screen_rows(&terminal)
        .iter()
        .filter(|r| r.contains("placehold.co"))
        .count();
    assert_eq!(hits, 1);
}

#[test]
/// What: The open menu lists the three sections and records clickable rects.
///
/// Inputs:
/// - Landing page with `menu_open == true`, then closed again.
///
/// Output:
/// - Entries and close control visible with rects; rects cleared once closed.
fn menu_overlay_renders_entries_and_rects() {
    let mut app = create_test_app_state();
    app.menu_open = true;
    let terminal = render_ui_to_backend(80, 24, &mut app);

    assert!(screen_contains(&terminal, "1. FEATURES"));
    assert!(screen_contains(&terminal, "2. HOW IT WORKS"));
    assert!(screen_contains(&terminal, "3. GALLERY"));
    assert!(screen_contains(&terminal, "✕"));
    assert!(screen_contains(&terminal, "Esc to close"));
    assert!(app.menu_close_rect.is_some());
    assert!(app.nav_rects.iter().all(Option::is_some));

    app.menu_open = false;
    let _ = render_ui_to_backend(80, 24, &mut app);
    assert!(app.menu_close_rect.is_none());
    assert!(app.nav_rects.iter().all(Option::is_none));
}

#[test]
/// What: Mouse flow through rendered rects: open the menu, jump to a section, go back.
///
/// Inputs:
/// - Click on the menu icon, click on the Gallery entry; then on the input view a
///   click on the back arrow.
///
/// Output:
/// - Menu opens, closes on the entry with the landing scrolled to the gallery anchor;
///   the back arrow returns to a reset landing view.
fn mouse_flow_uses_rendered_rects() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = create_test_app_state();
    let _ = render_ui_to_backend(80, 24, &mut app);

    let (mx, my, _, _) = app.menu_button_rect.expect("menu icon rect");
    assert!(!curate::events::handle_event(
        left_click(mx + 1, my),
        &mut app,
        &tx
    ));
    assert!(app.menu_open);

    let _ = render_ui_to_backend(80, 24, &mut app);
    let (gx, gy, _, _) = app.nav_rects[NavSection::Gallery.index()].expect("gallery rect");
    curate::events::handle_event(left_click(gx + 2, gy), &mut app, &tx);
    assert!(!app.menu_open);
    assert_eq!(
        app.landing_scroll,
        app.anchor_of(NavSection::Gallery).min(app.landing_max_scroll)
    );

    app.page = PageMode::Input;
    app.input = "neon city".into();
    let _ = render_ui_to_backend(80, 24, &mut app);
    let (bx, by, _, _) = app.back_button_rect.expect("back rect");
    curate::events::handle_event(left_click(bx + 1, by), &mut app, &tx);
    assert_eq!(app.page, PageMode::Landing);
    assert!(app.input.is_empty());
}
