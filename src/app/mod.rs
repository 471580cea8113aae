//! Curate application runtime.
//!
//! Terminal setup, the background timers and the event loop live here; the
//! view logic itself is in `logic`, `events` and `ui`.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run};
