//! Footer clock formatting.

use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone};

use crate::state::AppState;
use crate::theme::DEFAULT_CLOCK_FORMAT;

/// What: Format a timestamp as the footer clock string.
///
/// Inputs:
/// - `now`: Time to render.
/// - `pattern`: strftime pattern from the settings.
///
/// Output:
/// - Rendered time of day; falls back to `%H:%M` if `pattern` cannot be rendered.
#[must_use]
pub fn format_clock<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_CLOCK_FORMAT));
    }
    out
}

/// Recompute the footer clock from `now`.
pub fn tick_clock<Tz>(app: &mut AppState, now: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    app.clock = format_clock(now, &app.settings.clock_format);
}
