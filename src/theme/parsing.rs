//! Parsers for key chords, colors and inline comments in settings values.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// Named keys accepted in key bindings, matched case-insensitively.
const NAMED_KEYS: [(&str, KeyCode); 22] = [
    ("ESC", KeyCode::Esc),
    ("ESCAPE", KeyCode::Esc),
    ("ENTER", KeyCode::Enter),
    ("RETURN", KeyCode::Enter),
    ("TAB", KeyCode::Tab),
    ("BACKTAB", KeyCode::BackTab),
    ("BACKSPACE", KeyCode::Backspace),
    ("DELETE", KeyCode::Delete),
    ("DEL", KeyCode::Delete),
    ("HOME", KeyCode::Home),
    ("END", KeyCode::End),
    ("PAGEUP", KeyCode::PageUp),
    ("PGUP", KeyCode::PageUp),
    ("PAGEDOWN", KeyCode::PageDown),
    ("PGDN", KeyCode::PageDown),
    ("UP", KeyCode::Up),
    ("DOWN", KeyCode::Down),
    ("LEFT", KeyCode::Left),
    ("RIGHT", KeyCode::Right),
    ("SPACE", KeyCode::Char(' ')),
    ("INSERT", KeyCode::Insert),
    ("INS", KeyCode::Insert),
];

/// What: Parse one key token (e.g. "F2", "Esc", "?", "m") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a binding value.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` for unknown names and multi-character tokens.
///
/// Details:
/// - Single characters are lowercased so bindings match regardless of case.
#[must_use]
pub fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(n) = t.strip_prefix(['F', 'f']).and_then(|x| x.parse::<u8>().ok()) {
        return Some(KeyCode::F(n));
    }
    if let Some((_, code)) = NAMED_KEYS.iter().find(|(name, _)| name.eq_ignore_ascii_case(t)) {
        return Some(*code);
    }
    let mut chars = t.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(KeyCode::Char(ch.to_ascii_lowercase())),
        _ => None,
    }
}

/// What: Parse a full key chord such as "Ctrl+C" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `text`: Optional modifiers and a key token joined by `+`.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on invalid modifier/key combinations.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
#[must_use]
pub fn parse_key_chord(text: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key: Option<&str> = None;
    for part in text.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let modifier = match part.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => KeyModifiers::CONTROL,
            "ALT" => KeyModifiers::ALT,
            "SHIFT" => KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => KeyModifiers::SUPER,
            _ => {
                key = Some(part);
                continue;
            }
        };
        mods |= modifier;
    }
    let code = parse_key_identifier(key?)?;
    if code == KeyCode::Tab && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color text (inline comments already stripped).
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` / `RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
#[must_use]
pub fn parse_color_value(s: &str) -> Option<Color> {
    let text = s.trim();
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let mut channels = text.split(',').map(|p| p.trim().parse::<u8>().ok());
    match (channels.next(), channels.next(), channels.next(), channels.next()) {
        (Some(red), Some(green), Some(blue), None) => Some(Color::Rgb(red?, green?, blue?)),
        _ => None,
    }
}

/// What: Remove inline comments from a configuration value, keeping a leading hex marker.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and any `#` after the first character, so
///   `#RRGGBB` values survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let s = s.find("//").map_or(s, |i| &s[..i]);
    // A leading '#' belongs to a hex colour; only later ones start a comment.
    let skip = usize::from(s.starts_with('#'));
    let cut = s[skip..].find('#').map_or(s.len(), |i| i + skip);
    s[..cut].trim()
}
