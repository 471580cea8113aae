//! Command-line argument parsing.

pub mod definition;
pub mod utils;

pub use definition::Args;
pub use utils::determine_log_level;
