//! Theme, settings and key binding types.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application palette used by rendering code.
///
/// Defaults follow the stone shades of the Curate brand: near-black canvas,
/// warm grey surfaces and an off-white foreground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Panel and card background.
    pub surface: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Captions, hints and the large brand watermark.
    pub muted: Color,
    /// Highlights such as the focused input underline and menu selection.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(12, 10, 9),
            surface: Color::Rgb(28, 25, 23),
            text: Color::Rgb(245, 245, 244),
            muted: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(214, 211, 209),
        }
    }
}

/// Curation delay used when the settings file does not override it.
pub const DEFAULT_CURATION_DELAY_MS: u64 = 2000;

/// Clock pattern used when the settings file does not override it.
pub const DEFAULT_CLOCK_FORMAT: &str = "%H:%M";

/// Landing scroll offset (rows) below which keystrokes are captured.
pub const DEFAULT_SCROLL_TOP_THRESHOLD: u16 = 3;

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Simulated latency between submitting a prompt and seeing results.
    pub curation_delay_ms: u64,
    /// strftime pattern for the footer clock.
    pub clock_format: String,
    /// Landing scroll offset (rows) below which the typing shortcut is active.
    pub scroll_top_threshold: u16,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Colors.
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            curation_delay_ms: DEFAULT_CURATION_DELAY_MS,
            clock_format: DEFAULT_CLOCK_FORMAT.to_string(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            keymap: KeyMap::default(),
            theme: Theme::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key that must be pressed.
    pub code: KeyCode,
    /// Modifiers held with it.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// `true` for a character key that types text (no Ctrl, Alt, Super or Meta held).
    #[must_use]
    pub const fn is_printable(&self) -> bool {
        let blocking = KeyModifiers::CONTROL
            .union(KeyModifiers::ALT)
            .union(KeyModifiers::SUPER)
            .union(KeyModifiers::META);
        matches!(self.code, KeyCode::Char(_)) && !self.mods.intersects(blocking)
    }

    /// Return a short display label such as "Ctrl+C", "Tab", "Esc".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Leave the application from any view.
    pub quit: Vec<KeyChord>,
    /// Open the navigation menu (landing view).
    pub menu_open: Vec<KeyChord>,
    /// Close the navigation menu.
    pub menu_close: Vec<KeyChord>,
    /// Return from the input view to the landing view.
    pub back: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyChord {
                    code: KeyCode::Char('c'),
                    mods: KeyModifiers::CONTROL,
                },
                KeyChord {
                    code: KeyCode::Char('q'),
                    mods: KeyModifiers::CONTROL,
                },
            ],
            menu_open: vec![
                KeyChord::plain(KeyCode::Tab),
                KeyChord::plain(KeyCode::F(2)),
            ],
            menu_close: vec![
                KeyChord::plain(KeyCode::Esc),
                KeyChord::plain(KeyCode::Tab),
            ],
            back: vec![KeyChord::plain(KeyCode::Esc)],
        }
    }
}

/// What: Check whether a key event matches any chord in a binding list.
///
/// Inputs:
/// - `list`: Chords bound to one action.
/// - `code`, `mods`: Key code and modifiers of the incoming event.
///
/// Output:
/// - `true` when a chord matches exactly.
///
/// Details:
/// - Character keys compare case-insensitively; Shift is ignored for them since
///   terminals report it inconsistently alongside uppercase letters.
#[must_use]
pub fn matches_any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
    list.iter().any(|c| match (c.code, code) {
        (KeyCode::Char(a), KeyCode::Char(b)) => {
            let strip = |m: KeyModifiers| m - KeyModifiers::SHIFT;
            a.eq_ignore_ascii_case(&b) && strip(c.mods) == strip(mods)
        }
        _ => c.code == code && c.mods == mods,
    })
}
