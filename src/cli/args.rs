//! CLI argument parsing and configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name used under the platform data directory
const APP_DIR_NAME: &str = "wheel-tui";

/// Wheel TUI - spin a wheel of names in your terminal
#[derive(Debug, Parser)]
#[command(name = "wheel-tui", version = VERSION, about)]
pub struct Args {
    /// Directory holding the state database and log file
    #[arg(long, env = "WHEEL_TUI_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Spin duration in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 4000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub spin_ms: u64,

    /// Keep state in memory only; nothing is read from or written to disk,
    /// not even the log file
    #[arg(long)]
    pub ephemeral: bool,

    /// Seed for the random number generator (reproducible draws)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Disable fireworks and seasonal snow
    #[arg(long)]
    pub no_effects: bool,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Where state and logs live; `None` for an ephemeral session
    pub data_dir: Option<PathBuf>,
    pub spin_duration: Duration,
    pub seed: Option<u64>,
    pub effects: bool,
}

impl CliConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let data_dir = match (args.ephemeral, args.data_dir) {
            (true, _) => None,
            (false, Some(dir)) => Some(dir),
            (false, None) => Some(
                dirs::data_dir()
                    .map(|dir| dir.join(APP_DIR_NAME))
                    .context("Could not determine a data directory; pass --data-dir")?,
            ),
        };

        Ok(Self {
            data_dir,
            spin_duration: Duration::from_millis(args.spin_ms),
            seed: args.seed,
            effects: !args.no_effects,
        })
    }

    /// Log file inside the data directory. Ephemeral sessions don't log.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("wheel-tui.log"))
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(Args::parse())
}

/// Parse an explicit argument list (program name excluded)
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<CliConfig> {
    let args = Args::try_parse_from(std::iter::once("wheel-tui").chain(args.iter().copied()))?;
    CliConfig::from_args(args)
}
