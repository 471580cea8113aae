//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Curate - the AI curator that helps you discover human-made art
#[derive(Parser, Debug)]
#[command(name = "curate")]
#[command(version)]
#[command(about = "The AI curator that helps you discover human-made art", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the simulated curation delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Read settings from this file instead of ~/.config/curate/settings.conf
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are given.
    ///
    /// Inputs:
    /// - `["curate"]`.
    ///
    /// Output:
    /// - `info` level, not verbose, no delay or config override.
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["curate"]).expect("parse");
        assert_eq!(args.log_level, "info");
        assert!(!args.verbose);
        assert!(args.delay_ms.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    /// What: All flags parse into their fields.
    ///
    /// Inputs:
    /// - `-v --delay-ms 500 --config /tmp/c.conf --log-level warn`.
    ///
    /// Output:
    /// - Matching field values; a non-numeric delay is rejected.
    fn flags_parse() {
        let args = Args::try_parse_from([
            "curate",
            "-v",
            "--delay-ms",
            "500",
            "--config",
            "/tmp/c.conf",
            "--log-level",
            "warn",
        ])
        .expect("parse");
        assert!(args.verbose);
        assert_eq!(args.delay_ms, Some(500));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.conf")));
        assert_eq!(args.log_level, "warn");
        assert!(Args::try_parse_from(["curate", "--delay-ms", "soon"]).is_err());
    }
}
