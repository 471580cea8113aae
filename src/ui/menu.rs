//! Slide-in navigation panel drawn over the right edge of either view.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{AppState, NavSection};

/// Width of the slide-in panel in cells.
const MENU_WIDTH: u16 = 32;
/// Row (relative to the panel) of the first entry; entries are two rows apart.
const FIRST_ENTRY_ROW: u16 = 4;

/// What: Draw the navigation panel over the right edge and record its hit rects.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Mutable view state; `menu_close_rect` and `nav_rects` are recorded here.
/// - `area`: Full frame area.
///
/// Details:
/// - Entries that do not fit vertically get no rect and cannot be clicked.
pub fn render_menu(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.settings.theme;
    let width = MENU_WIDTH.min(area.width);
    let panel = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    };
    f.render_widget(Clear, panel);

    let bold = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(vec![
        Span::raw(" ".repeat(usize::from(width.saturating_sub(4)))),
        Span::styled("✕", bold),
    ])];
    lines.resize(usize::from(FIRST_ENTRY_ROW), Line::default());
    app.menu_close_rect = Some((panel.x + width.saturating_sub(5), panel.y, 3, 1));

    for section in NavSection::ALL {
        let row = FIRST_ENTRY_ROW + 2 * u16::try_from(section.index()).unwrap_or(0);
        let selected = app.menu_selected == section.index();
        let style = if selected {
            Style::default()
                .fg(th.base)
                .bg(th.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text)
        };
        let number = section.index() + 1;
        let label = format!("  {number}. {}", section.label().to_uppercase());
        let pad = usize::from(width.saturating_sub(2)).saturating_sub(label.chars().count());
        let padded = format!("{label}{}", " ".repeat(pad));
        lines.push(Line::from(Span::styled(padded, style)));
        lines.push(Line::default());
        app.nav_rects[section.index()] = (row < panel.height)
            .then(|| (panel.x + 1, panel.y + row, width.saturating_sub(2), 1));
    }

    if let Some(close) = app.settings.keymap.menu_close.first() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  {} to close", close.label()),
            Style::default().fg(th.muted),
        )));
    }

    let para = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(th.muted)),
        )
        .style(Style::default().fg(th.text).bg(th.surface));
    f.render_widget(para, panel);
}
