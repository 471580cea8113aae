//! Main loop: draw, then handle the next terminal event, clock tick or curation completion.

use chrono::Local;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic::{complete_curation, tick_clock};
use crate::state::AppState;
use crate::ui::ui;

use super::background::Channels;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for a terminal event, a clock refresh or a curation completion
/// - Stale completions are discarded by `complete_curation`
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.curation_tx)
        }
        Some(()) = channels.clock_rx.recv() => {
            tick_clock(app, &Local::now());
            false
        }
        Some(done) = channels.done_rx.recv() => {
            complete_curation(app, done);
            false
        }
        else => false
    }
}

/// What: Run the main event loop, rendering after every handled message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: None (runs until a quit binding is pressed)
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "failed to draw frame");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
