//! Runtime wiring: settings, terminal, background producers and the event loop.

use std::path::PathBuf;

use chrono::Local;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::tick_clock;
use crate::state::AppState;
use crate::theme::load_settings;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod event_loop;

use background::{CLOCK_PERIOD, Channels, ClockTicker, EventReader};
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Start-up options taken from the command line.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Alternate settings file; `None` uses the standard config locations.
    pub config_path: Option<PathBuf>,
    /// Curation delay override in milliseconds.
    pub delay_ms: Option<u64>,
}

/// What: Run the Curate TUI end-to-end: load settings, set up the terminal, start the
/// input reader and clock, drive the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Settings file and delay overrides from the command line.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// # Errors
/// - Returns `Err` when raw mode or the alternate screen cannot be entered or left,
///   or when the terminal backend cannot be created.
///
/// Details:
/// - `CURATE_TEST_HEADLESS=1` skips raw mode, the alternate screen and the input thread.
/// - The input reader and clock are guards; dropping them (normal exit or task
///   cancellation) stops both.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("CURATE_TEST_HEADLESS").ok().as_deref() == Some("1");

    let RunOptions {
        config_path,
        delay_ms,
    } = options;
    let mut settings = load_settings(config_path.as_deref());
    if let Some(ms) = delay_ms {
        settings.curation_delay_ms = ms;
    }
    tracing::info!(
        delay_ms = settings.curation_delay_ms,
        clock_format = %settings.clock_format,
        headless,
        "settings loaded"
    );
    let mut app = AppState::new(settings);
    tick_clock(&mut app, &Local::now());

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut channels = Channels::new();
    let reader = EventReader::spawn(headless, channels.event_tx.clone());
    let ticker = ClockTicker::spawn(channels.clock_tx.clone(), CLOCK_PERIOD);

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    drop(ticker);
    drop(reader);
    tracing::debug!(generation = app.curation_generation, "event loop exited");
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
