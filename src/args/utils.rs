//! Helpers derived from parsed arguments.

use crate::args::Args;

/// What: Determine the log level from command line arguments.
///
/// Inputs:
/// - `args`: Parsed command line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
