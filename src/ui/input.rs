//! Input view: back arrow, prompt field, hint, loading indicator and results grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::helpers::{spread_line, truncate_to_width, url_lines};
use crate::catalog::{RESULTS, aspect_for, slot_url};
use crate::state::AppState;
use crate::theme::Theme;

/// Placeholder shown in the empty prompt field.
pub const PLACEHOLDER: &str = "A futuristic city skyline at dusk, impressionist style...";
/// Hint shown under the prompt field.
pub const HINT: &str = "Press Enter to curate";
/// Appended to the hint while more result rows are off screen.
pub const SCROLL_HINT: &str = "↑/↓ for more";
/// Message shown while the curation delay runs.
pub const LOADING_TEXT: &str = "Curating your results...";

const CARD_HEIGHT: u16 = 7;

/// Number of result columns for a given width: 4 on wide, 3 on medium, 2 otherwise.
#[must_use]
pub const fn grid_columns(width: u16) -> u16 {
    if width >= 120 {
        4
    } else if width >= 80 {
        3
    } else {
        2
    }
}

/// What: Render the prompt entry view: back arrow, prompt field, hint, body and footer.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Mutable view state; `back_button_rect` and the results scroll range are
///   recorded here.
/// - `area`: Region covering the whole view.
///
/// Details:
/// - Body shows the loading indicator, the results grid, or nothing.
/// - The terminal cursor is placed at the prompt caret while the menu is closed.
pub fn render_input(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.settings.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        " ←",
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(th.base));
    f.render_widget(header, chunks[0]);
    let back_w = 4.min(chunks[0].width);
    app.back_button_rect = Some((chunks[0].x, chunks[0].y, back_w, 1));

    render_prompt(f, app, &th, chunks[2]);

    if app.loading {
        app.results_max_scroll = 0;
        let loading = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled("◐", Style::default().fg(th.text))),
            Line::from(Span::styled(LOADING_TEXT, Style::default().fg(th.muted))),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(th.base));
        f.render_widget(loading, chunks[4]);
    } else if app.results_visible {
        render_results(f, app, &th, chunks[4]);
    } else {
        app.results_max_scroll = 0;
    }

    let hint_text = if app.results_visible && app.results_scroll < app.results_max_scroll {
        format!("{HINT}  ·  {SCROLL_HINT}")
    } else {
        HINT.to_string()
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        hint_text,
        Style::default().fg(th.muted),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(th.base));
    f.render_widget(hint, chunks[3]);

    let clock = format!("{} ", app.clock);
    let footer = spread_line(
        vec![Span::styled(" @CURATE_AI", Style::default().fg(th.muted))],
        vec![Span::styled(clock, Style::default().fg(th.text))],
        chunks[5].width,
    );
    f.render_widget(
        Paragraph::new(footer).style(Style::default().bg(th.base)),
        chunks[5],
    );
}

fn render_prompt(f: &mut Frame, app: &AppState, th: &Theme, area: Rect) {
    let width = area.width.saturating_sub(4).min(72);
    // Text row plus the underline, vertically centered in the prompt band.
    let field = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(2) / 2,
        width,
        height: area.height.min(2),
    };
    let inner_w = usize::from(width);
    let (text, style) = if app.input.is_empty() {
        (
            truncate_to_width(PLACEHOLDER, inner_w),
            Style::default().fg(th.muted).add_modifier(Modifier::ITALIC),
        )
    } else {
        (app.input.clone(), Style::default().fg(th.text))
    };

    // Keep the caret visible when the prompt is wider than the field.
    let before: String = app.input.chars().take(app.caret).collect();
    let caret_col = before.width();
    let offset = caret_col.saturating_sub(inner_w.saturating_sub(1));
    let shown: String = if app.input.is_empty() {
        text
    } else {
        let mut skipped = 0usize;
        text.chars()
            .skip_while(|c| {
                let skip = skipped < offset;
                if skip {
                    skipped += c.width().unwrap_or(0);
                }
                skip
            })
            .collect()
    };

    let para = Paragraph::new(Line::from(Span::styled(shown, style)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(th.muted)),
        )
        .style(Style::default().bg(th.base));
    f.render_widget(para, field);

    if !app.menu_open && width > 0 {
        let col = u16::try_from(caret_col - offset.min(caret_col)).unwrap_or(0);
        f.set_cursor_position(Position::new(
            field.x + col.min(width.saturating_sub(1)),
            field.y,
        ));
    }
}

/// Card body: artist, match score, aspect, then the thumbnail URL over up to two rows.
fn card_lines(index: usize, app: &AppState, th: &Theme, inner_w: usize) -> Vec<Line<'static>> {
    let item = RESULTS[index];
    let url = slot_url(index, app.thumbnails[index]);
    let muted = Style::default().fg(th.muted);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("by {}", item.artist),
            Style::default().fg(th.text),
        )),
        Line::from(Span::styled(
            format!("{}% Match", item.match_score),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(aspect_for(index).label(), muted)),
    ];
    for row in url_lines(&url, inner_w) {
        lines.push(Line::from(Span::styled(row, muted)));
    }
    lines
}

/// What: Draw the visible rows of the results grid and record its scroll range.
///
/// Inputs:
/// - `app`: Mutable view state; `results_max_scroll` is recorded and `results_scroll`
///   clamped to it.
/// - `area`: Body region below the hint.
///
/// Details:
/// - Scrolling is by whole card rows. A single row that is taller than the body is
///   still drawn, clipped at the bottom.
fn render_results(f: &mut Frame, app: &mut AppState, th: &Theme, area: Rect) {
    let cols = grid_columns(area.width);
    let pad = 1u16;
    let card_w = area.width.saturating_sub(pad * 2) / cols;
    let total_rows = u16::try_from(RESULTS.len())
        .unwrap_or(u16::MAX)
        .div_ceil(cols);
    let visible_rows = (area.height / CARD_HEIGHT).max(1);
    app.results_max_scroll = total_rows.saturating_sub(visible_rows);
    app.results_scroll = app.results_scroll.min(app.results_max_scroll);
    if card_w < 4 || area.height == 0 {
        return;
    }

    let bottom = area.y + area.height;
    for (i, item) in RESULTS.iter().enumerate() {
        let pos = u16::try_from(i).unwrap_or(u16::MAX);
        let (col, row) = (pos % cols, pos / cols);
        if row < app.results_scroll {
            continue;
        }
        let y = area.y + (row - app.results_scroll) * CARD_HEIGHT;
        let first_row = row == app.results_scroll;
        if y >= bottom || (y + CARD_HEIGHT > bottom && !first_row) {
            break;
        }
        let rect = Rect {
            x: area.x + pad + col * card_w,
            y,
            width: card_w,
            height: CARD_HEIGHT.min(bottom - y),
        };
        let title = truncate_to_width(item.title, usize::from(card_w.saturating_sub(4)));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ));
        let inner_w = usize::from(card_w.saturating_sub(2));
        let card = Paragraph::new(card_lines(i, app, th, inner_w))
            .block(block)
            .style(Style::default().bg(th.base));
        f.render_widget(card, rect);
    }
}
