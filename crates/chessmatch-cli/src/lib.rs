//! Terminal front end for chessmatch: input parsing, rendering and the
//! two-player session loop.

pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod ui;

pub use config::Config;
pub use error::CliError;
pub use input::{Command, parse_command, parse_position};
pub use session::{Outcome, Session};
pub use ui::Painter;
