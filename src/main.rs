use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lsdir::{RealFileSystem, TreeOptions};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lsdir: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(options: TreeOptions) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = lsdir::run(&RealFileSystem, &options, &mut out).await;
    // Flush whatever was written even when the walk failed partway.
    let flushed = out.flush().context("failed to flush standard output");
    result?;
    flushed
}

// Diagnostics go to stderr so stdout carries only the tree.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
