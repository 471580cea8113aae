//! Landing page: full-screen hero followed by the features, steps and gallery sections.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::{centered_paragraph, spread_line};
use crate::state::{AppState, NavSection};
use crate::theme::Theme;

/// Block-letter rendering of the brand, five rows tall.
const BANNER: [&str; 5] = [
    " ████ █   █ ████   ███  █████ █████",
    "█     █   █ █   █ █   █   █   █    ",
    "█     █   █ ████  █████   █   ████ ",
    "█     █   █ █  █  █   █   █   █    ",
    " ████  ███  █   █ █   █   █   █████",
];

/// Stone shades used for the decorative gallery tiles.
const TILE_SHADES: [Color; 3] = [
    Color::Rgb(41, 37, 36),
    Color::Rgb(68, 64, 60),
    Color::Rgb(87, 83, 78),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-POWERED CURATION",
        "Advanced algorithms analyze your preferences to discover art that matches your unique taste profile.",
    ),
    (
        "HUMAN-MADE FOCUS",
        "Exclusively featuring authentic human-created artwork from talented artists around the world.",
    ),
    (
        "PERSONALIZED DISCOVERY",
        "Every recommendation is tailored to your evolving artistic preferences and discovery journey.",
    ),
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "01",
        "DESCRIBE YOUR VISION",
        "Start by typing what you're looking for. Whether it's a mood, style, or specific subject matter, our AI understands your creative language.",
    ),
    (
        "02",
        "AI ANALYSIS",
        "Our sophisticated algorithms analyze thousands of artworks, matching style, composition, color palette, and emotional resonance to your request.",
    ),
    (
        "03",
        "CURATED RESULTS",
        "Receive a carefully curated selection of human-made artworks that perfectly match your aesthetic preferences and creative vision.",
    ),
];

/// Gallery tile widths (in cells) and shade indices, eleven tiles like the web grid.
const GALLERY_TILES: [(u16, usize); 11] = [
    (8, 0),
    (6, 1),
    (8, 2),
    (10, 0),
    (10, 1),
    (8, 2),
    (6, 0),
    (8, 1),
    (18, 2),
    (8, 0),
    (6, 1),
];

/// Rendered landing page plus the row at which each navigation section starts.
pub(crate) struct LandingPage {
    /// Every row of the page, hero first.
    pub lines: Vec<Line<'static>>,
    /// Starting row of each section, indexed by [`NavSection::index`].
    pub anchors: [u16; 3],
}

fn row(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn section_title(title: &str, th: &Theme) -> Line<'static> {
    let spaced: String = title
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Line::from(Span::styled(
        spaced,
        Style::default().fg(th.muted).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
}

/// One colored block followed by a gap.
fn swatch(color: Color) -> [Span<'static>; 2] {
    [
        Span::styled("████", Style::default().fg(color)),
        Span::raw(" "),
    ]
}

/// Blank row, spaced-out title, blank row.
fn section_head(title: &str, th: &Theme) -> Vec<Line<'static>> {
    vec![Line::default(), section_title(title, th), Line::default()]
}

/// Full-screen hero: header, brand, taglines, typing prompt and footer.
fn hero_lines(app: &AppState, th: &Theme, width: u16, height: u16) -> Vec<Line<'static>> {
    let hero_h = usize::from(height.max(16));
    let mut lines: Vec<Line<'static>> = vec![Line::default(); hero_h];
    let text = Style::default().fg(th.text);
    let muted = Style::default().fg(th.muted);
    let bold = text.add_modifier(Modifier::BOLD);

    lines[0] = spread_line(
        vec![Span::styled(" ✓", bold)],
        vec![Span::styled("☰ ", bold)],
        width,
    );

    let mut block: Vec<Line<'static>> = Vec::new();
    if usize::from(width) >= BANNER[0].chars().count() + 2 {
        for b in BANNER {
            block.push(
                Line::from(Span::styled(b, Style::default().fg(th.muted)))
                    .alignment(Alignment::Center),
            );
        }
    } else {
        block.push(
            Line::from(Span::styled(
                "CURATE",
                Style::default().fg(th.muted).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }
    block.push(Line::default());
    let wrap = usize::from(width.saturating_sub(4)).clamp(10, 60);
    block.extend(centered_paragraph(
        "THE AI CURATOR THAT HELPS YOU DISCOVER A THING OR TWO.",
        wrap,
        bold,
    ));
    block.extend(centered_paragraph("STARTING WITH YOUR TASTE.", wrap, text));
    block.push(Line::default());
    block.extend(centered_paragraph(
        "FIND THE BEST HUMAN-MADE ART FOR YOU.",
        wrap,
        bold,
    ));

    let prompt_row = hero_h - 4;
    let top = (hero_h.saturating_sub(block.len()) * 45 / 100).max(2);
    for (i, line) in block.into_iter().enumerate() {
        let at = top + i;
        if at < prompt_row {
            lines[at] = line;
        }
    }
    let prompt = Line::from(Span::styled("S T A R T   T Y P I N G", muted));
    lines[prompt_row] = prompt.alignment(Alignment::Center);
    lines[hero_h - 1] = spread_line(
        vec![
            Span::styled(" SOCIALS: ", bold),
            Span::styled("@CURATE_AI", text),
        ],
        vec![Span::styled(format!("{} ", app.clock), text)],
        width,
    );
    lines
}

fn features_lines(th: &Theme, width: u16) -> Vec<Line<'static>> {
    let wrap = usize::from(width.saturating_sub(8)).clamp(10, 56);
    let muted = Style::default().fg(th.muted);
    let mut lines = section_head("FEATURES", th);
    for (title, body) in FEATURES {
        lines.push(
            Line::from(Span::styled("◉", Style::default().fg(th.accent)))
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                title,
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.extend(centered_paragraph(body, wrap, muted));
        lines.push(Line::default());
    }
    lines
}

fn steps_lines(th: &Theme, width: u16) -> Vec<Line<'static>> {
    let wrap = usize::from(width.saturating_sub(8)).clamp(10, 64);
    let muted = Style::default().fg(th.muted);
    let mut lines = section_head("HOW IT WORKS", th);
    for (i, (num, title, body)) in STEPS.into_iter().enumerate() {
        lines.push(
            Line::from(Span::styled(
                num,
                Style::default().fg(th.surface).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                title,
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
        lines.extend(centered_paragraph(body, wrap, muted));
        lines.push(Line::default());
        let aside: Vec<Line<'static>> = match i {
            0 => vec![
                Line::from(Span::styled("EXAMPLE INPUT", muted)),
                Line::from(Span::styled(
                    "\"Moody urban landscapes with warm lighting\"",
                    Style::default().fg(th.text).add_modifier(Modifier::ITALIC),
                )),
            ],
            1 => vec![Line::from(Span::styled("◐", Style::default().fg(th.text)))],
            _ => vec![Line::from(
                TILE_SHADES
                    .iter()
                    .chain(std::iter::once(&TILE_SHADES[0]))
                    .flat_map(|c| swatch(*c))
                    .collect::<Vec<_>>(),
            )],
        };
        lines.extend(aside.into_iter().map(|l| l.alignment(Alignment::Center)));
        lines.push(Line::default());
    }
    lines
}

fn gallery_lines(th: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = section_head("GALLERY", th);
    let usable = width.saturating_sub(4).max(8);
    let mut rows: Vec<Vec<(u16, usize)>> = vec![Vec::new()];
    let mut used = 0u16;
    for (w, shade) in GALLERY_TILES {
        let w = w.min(usable);
        if used > 0 && used + 1 + w > usable {
            rows.push(Vec::new());
            used = 0;
        }
        if let Some(last) = rows.last_mut() {
            used += if last.is_empty() { w } else { w + 1 };
            last.push((w, shade));
        }
    }
    for tiles in rows {
        for _ in 0..3 {
            let spans: Vec<Span<'static>> = tiles
                .iter()
                .flat_map(|&(w, shade)| {
                    [
                        Span::styled(
                            "█".repeat(usize::from(w)),
                            Style::default().fg(TILE_SHADES[shade % TILE_SHADES.len()]),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            lines.push(Line::from(spans).alignment(Alignment::Center));
        }
        lines.push(Line::default());
    }
    let wrap = usize::from(width.saturating_sub(4)).clamp(10, 72);
    lines.extend(centered_paragraph(
        "Discover thousands of curated artworks from talented artists worldwide",
        wrap,
        Style::default().fg(th.muted),
    ));
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "[ EXPLORE MORE ]",
            Style::default()
                .fg(th.text)
                .bg(th.surface)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());
    lines
}

/// What: Lay out the whole landing page for a viewport.
///
/// Inputs:
/// - `app`: View state (clock text).
/// - `th`: Palette.
/// - `width`, `height`: Viewport size; the hero fills one screen.
///
/// Output:
/// - All page lines and the starting row of each [`NavSection`].
#[must_use]
pub(crate) fn build_landing(app: &AppState, th: &Theme, width: u16, height: u16) -> LandingPage {
    let mut lines = hero_lines(app, th, width, height);
    let mut anchors = [0u16; 3];
    for section in NavSection::ALL {
        anchors[section.index()] = row(lines.len());
        lines.extend(match section {
            NavSection::Features => features_lines(th, width),
            NavSection::HowItWorks => steps_lines(th, width),
            NavSection::Gallery => gallery_lines(th, width),
        });
    }
    LandingPage { lines, anchors }
}

/// What: Render the landing view and record scroll bounds, anchors and the menu icon rect.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Mutable view state.
/// - `area`: Region covering the whole view.
pub fn render_landing(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.settings.theme;
    let page = build_landing(app, &th, area.width, area.height);
    app.landing_anchors = page.anchors;
    app.landing_max_scroll = row(page.lines.len()).saturating_sub(area.height);
    app.landing_scroll = app.landing_scroll.min(app.landing_max_scroll);
    app.menu_button_rect = (app.landing_scroll == 0 && area.width >= 3)
        .then(|| (area.x + area.width - 3, area.y, 3, 1));

    let para = Paragraph::new(page.lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .scroll((app.landing_scroll, 0));
    f.render_widget(para, area);
}
