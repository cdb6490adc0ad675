//! Command-line configuration.

use clap::{ArgAction, Parser};
use tracing::Level;

/// Two players take turns at one terminal. At each prompt type a square
/// such as e2, or one of: help, quit, exit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "chessmatch")]
#[command(about = "Two-player chess at one terminal")]
pub struct Config {
    /// Print the board without ANSI colors (also set by NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen before drawing the board
    #[arg(long)]
    pub no_clear: bool,

    /// Log more to stderr; repeat for trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Apply the `NO_COLOR` convention: any non-empty value turns colors off.
    pub fn with_env(mut self) -> Config {
        if std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            self.no_color = true;
        }
        self
    }

    /// Emit ANSI colors.
    pub fn color(&self) -> bool {
        !self.no_color
    }

    /// Clear the screen before each board render.
    pub fn clear_screen(&self) -> bool {
        !self.no_clear
    }

    /// Maximum level written to the log.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
