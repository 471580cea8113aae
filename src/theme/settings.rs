//! Reading `settings.conf` into [`Settings`].

use std::fs;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};

use super::parsing::{parse_color_value, parse_key_chord, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use super::types::{KeyChord, Settings};
use crate::util::config::{normalize_key, parse_key_value, skip_comment_or_empty};

/// What: Load settings from an explicit path or the resolved config location.
///
/// Inputs:
/// - `override_path`: File given on the command line; takes precedence when set.
///
/// Output:
/// - Parsed [`Settings`], or `Settings::default()` when no readable file exists.
///
/// Details:
/// - A missing or unreadable file is not an error; it is logged and defaults apply.
#[must_use]
pub fn load_settings(override_path: Option<&Path>) -> Settings {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(resolve_settings_config_path);
    let Some(path) = path else {
        tracing::debug!("no settings file found; using defaults");
        return Settings::default();
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read settings; using defaults"
            );
            Settings::default()
        }
    }
}

/// What: Parse the contents of a `settings.conf` file.
///
/// Inputs:
/// - `content`: Full file text.
///
/// Output:
/// - [`Settings`] with every recognized, valid key applied over the defaults.
///
/// Details:
/// - Invalid values keep the default and log a warning; unknown keys are ignored.
/// - Keybinding keys replace the whole chord list for that action.
/// - A menu binding must not be a printable key: on the landing page typing starts
///   the prompt before any binding is consulted, so such a chord could never fire.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let key = normalize_key(&raw_key);
        let val = strip_inline_comment(&raw_val);
        if !apply_setting(&mut out, &key, val) {
            tracing::warn!(key = %key, value = %val, "ignoring invalid settings value");
        }
    }
    out
}

/// Apply one normalized key; returns `false` when the value was rejected.
fn apply_setting(out: &mut Settings, key: &str, val: &str) -> bool {
    match key {
        "curation_delay_ms" | "delay_ms" => val
            .parse::<u64>()
            .map(|v| out.curation_delay_ms = v)
            .is_ok(),
        "clock_format" => {
            if is_valid_clock_format(val) {
                out.clock_format = val.to_string();
                true
            } else {
                false
            }
        }
        "scroll_top_threshold" => val
            .parse::<u16>()
            .map(|v| out.scroll_top_threshold = v.max(1))
            .is_ok(),
        "keybind_menu" | "keybind_menu_open" => set_menu_chord(&mut out.keymap.menu_open, val),
        "keybind_close_menu" | "keybind_menu_close" => set_chord(&mut out.keymap.menu_close, val),
        "keybind_back" => set_chord(&mut out.keymap.back, val),
        "keybind_quit" | "keybind_exit" => set_chord(&mut out.keymap.quit, val),
        "color_base" => set_color(&mut out.theme.base, val),
        "color_surface" => set_color(&mut out.theme.surface, val),
        "color_text" => set_color(&mut out.theme.text, val),
        "color_muted" => set_color(&mut out.theme.muted, val),
        "color_accent" => set_color(&mut out.theme.accent, val),
        other => {
            tracing::debug!(key = %other, "unknown settings key");
            true
        }
    }
}

fn set_chord(slot: &mut Vec<KeyChord>, val: &str) -> bool {
    parse_key_chord(val).map(|ch| *slot = vec![ch]).is_some()
}

fn set_menu_chord(slot: &mut Vec<KeyChord>, val: &str) -> bool {
    match parse_key_chord(val) {
        Some(ch) if ch.is_printable() => {
            tracing::debug!(value = %val, "printable menu binding would be captured by the prompt");
            false
        }
        Some(ch) => {
            *slot = vec![ch];
            true
        }
        None => false,
    }
}

fn set_color(slot: &mut ratatui::style::Color, val: &str) -> bool {
    parse_color_value(val).map(|c| *slot = c).is_some()
}

/// `true` when `pattern` is a non-empty strftime pattern chrono can render.
#[must_use]
pub fn is_valid_clock_format(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
