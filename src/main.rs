use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use chessmatch_cli::{Config, Outcome, Session};

fn main() -> Result<()> {
    let config = Config::parse().with_env();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .init();
    info!("chessmatch starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = Session::new(stdin.lock(), stdout.lock(), config).run()?;
    if let Outcome::Checkmate { winner } = outcome {
        info!(%winner, "chessmatch finished");
    }
    Ok(())
}
