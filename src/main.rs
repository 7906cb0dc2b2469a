use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use censorkit::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .init();

    let config_path = cli::config_path(cli.config.as_deref());
    match cli::run(cli).with_context(|| format!("config {}", config_path.display())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("censorkit: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
