//! Curate binary entrypoint kept minimal. The full runtime lives in `curate::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use curate::app::{self, RunOptions};
use curate::args::{Args, determine_log_level};

struct CurateTimer;

impl tracing_subscriber::fmt::time::FormatTime for CurateTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Build the log filter from `RUST_LOG`, falling back to the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing to `~/.config/curate/logs/curate.log`, or stderr if that fails.
fn init_logging(level: &str) {
    let mut log_path = curate::theme::logs_dir();
    log_path.push("curate.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CurateTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CurateTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Curate starting");
    let options = RunOptions {
        config_path: args.config,
        delay_ms: args.delay_ms,
    };
    if let Err(err) = app::run(options).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Curate exited");
}
