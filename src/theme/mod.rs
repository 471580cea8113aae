//! Settings, key bindings and palette for Curate.
//!
//! Everything here is read once at start-up from `settings.conf`; public
//! re-exports keep the `crate::theme::*` API flat.

/// Configuration parsing utilities (chords, colors, comments).
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings file loading.
mod settings;
/// Theme, settings and keymap type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{is_valid_clock_format, load_settings, parse_settings};
pub use types::{
    DEFAULT_CLOCK_FORMAT, DEFAULT_CURATION_DELAY_MS, DEFAULT_SCROLL_TOP_THRESHOLD, KeyChord,
    KeyMap, Settings, Theme, matches_any,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
