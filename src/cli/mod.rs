//! CLI argument parsing for wheel-tui.

mod args;

pub use args::{CliConfig, VERSION, parse_args};
#[cfg(test)]
pub use args::parse_args_from;
