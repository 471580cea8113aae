//! Text layout helpers shared by the views.

use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Greedy word wrap measured in terminal cells.
///
/// Inputs:
/// - `text`: Paragraph to wrap.
/// - `width`: Maximum cells per line (treated as at least 1).
///
/// Output:
/// - Wrapped lines; words longer than `width` are hard-split.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            if current.width() + ch.width().unwrap_or(0) > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// What: Truncate text to a cell width, marking the cut with an ellipsis.
///
/// Inputs:
/// - `text`: Source text.
/// - `width`: Maximum cells.
///
/// Output:
/// - `text` unchanged when it fits; otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + ch.width().unwrap_or(0) + 1 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Build one line with content pinned to the left and right edges.
///
/// Inputs:
/// - `left`, `right`: Styled spans for each edge.
/// - `width`: Total line width in cells.
///
/// Output:
/// - A line padded with spaces so `right` ends at `width`.
#[must_use]
pub fn spread_line<'a>(left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: u16) -> Line<'a> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let gap = usize::from(width).saturating_sub(used);
    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

/// What: Lay a URL over at most two rows so its tail stays readable.
///
/// Inputs:
/// - `url`: Full URL text.
/// - `width`: Row width in cells.
///
/// Output:
/// - One row when the URL fits. Otherwise the head that fills the first row, then
///   the remainder, or `…` plus the last `width - 1` cells when the remainder is
///   still too wide.
#[must_use]
pub fn url_lines(url: &str, width: usize) -> Vec<String> {
    if width == 0 || url.width() <= width {
        return vec![truncate_to_width(url, width)];
    }
    let mut head = String::new();
    let mut split = url.len();
    for (idx, ch) in url.char_indices() {
        if head.width() + ch.width().unwrap_or(0) > width {
            split = idx;
            break;
        }
        head.push(ch);
    }
    let rest = &url[split..];
    if rest.width() <= width {
        return vec![head, rest.to_string()];
    }
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0usize;
    for ch in rest.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        tail.push(ch);
    }
    let tail: String = std::iter::once('…').chain(tail.into_iter().rev()).collect();
    vec![head, tail]
}

/// Wrap `text` and center each resulting line.
#[must_use]
pub fn centered_paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_words(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)).alignment(Alignment::Center))
        .collect()
}
