//! Background producers feeding the event loop: curation timers, clock ticks and terminal input.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::state::{CurationDone, CurationRequest};

/// How often the footer clock is refreshed.
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders are kept alongside their receivers so the event loop never sees a
///   closed channel while it runs.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub clock_tx: mpsc::UnboundedSender<()>,
    pub clock_rx: mpsc::UnboundedReceiver<()>,
    pub curation_tx: mpsc::UnboundedSender<CurationRequest>,
    pub done_rx: mpsc::UnboundedReceiver<CurationDone>,
}

impl Channels {
    /// What: Create all channels and start the curation delay worker.
    ///
    /// Output:
    /// - A `Channels` bundle; must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (clock_tx, clock_rx) = mpsc::unbounded_channel::<()>();
        let (curation_tx, curation_rx) = mpsc::unbounded_channel::<CurationRequest>();
        let (done_tx, done_rx) = mpsc::unbounded_channel::<CurationDone>();
        spawn_curation_worker(curation_rx, done_tx);
        Self {
            event_tx,
            event_rx,
            clock_tx,
            clock_rx,
            curation_tx,
            done_rx,
        }
    }
}

/// What: Run the simulated curation delay for every submitted request.
///
/// Inputs:
/// - `curation_rx`: Requests from `submit_curation`.
/// - `done_tx`: Completions back to the event loop.
///
/// Details:
/// - Each request gets its own timer so overlapping submissions all complete; the event
///   loop discards the ones whose generation is no longer current.
/// - The worker ends once every request sender is dropped.
pub fn spawn_curation_worker(
    mut curation_rx: mpsc::UnboundedReceiver<CurationRequest>,
    done_tx: mpsc::UnboundedSender<CurationDone>,
) {
    tokio::spawn(async move {
        while let Some(req) = curation_rx.recv().await {
            let tx = done_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(req.delay).await;
                tracing::debug!(id = req.id, "curation delay elapsed");
                let _ = tx.send(CurationDone { id: req.id });
            });
        }
    });
}

/// Periodic clock refresh, stopped when dropped.
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// What: Start sending a refresh signal every `period`, beginning immediately.
    ///
    /// Inputs:
    /// - `clock_tx`: Channel the event loop listens on.
    /// - `period`: Interval between refreshes.
    #[must_use]
    pub fn spawn(clock_tx: mpsc::UnboundedSender<()>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                if clock_tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("clock ticker stopped");
    }
}

/// Terminal input reader running on its own thread, cancelled when dropped.
pub struct EventReader {
    cancelled: Arc<AtomicBool>,
}

impl EventReader {
    /// What: Start forwarding terminal events to the event loop.
    ///
    /// Inputs:
    /// - `headless`: When `true`, no thread is started (tests without a TTY).
    /// - `event_tx`: Channel the event loop listens on.
    ///
    /// Details:
    /// - Polls with a 50ms timeout so cancellation is noticed promptly.
    /// - Exits on cancellation or once the receiver is gone.
    #[must_use]
    pub fn spawn(headless: bool, event_tx: mpsc::UnboundedSender<CEvent>) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        if !headless {
            let flag = cancelled.clone();
            std::thread::spawn(move || {
                while !flag.load(Ordering::Relaxed) {
                    match crossterm::event::poll(Duration::from_millis(50)) {
                        Ok(true) => match crossterm::event::read() {
                            Ok(ev) => {
                                if flag.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                                    break;
                                }
                            }
                            Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                        },
                        Ok(false) => {}
                        Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
                    }
                }
            });
        }
        Self { cancelled }
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
