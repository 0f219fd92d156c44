//! exercisectl-import - load the exercise catalog into PostgreSQL
//!
//! Reads the catalog document, and if the `exercises` table is empty inserts
//! every exercise, its name, its muscles and the exercise/muscle links in a
//! single transaction. A populated table is left untouched.

use anyhow::{anyhow, Result};
use clap::Parser;
use exercisectl_import::{run_import, ImportArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "exercisectl-import",
    author,
    version,
    about = "Import the exercise catalog into PostgreSQL (skipped if already populated)"
)]
struct Cli {
    /// Only log warnings and errors
    #[arg(long, short = 'q')]
    quiet: bool,

    #[command(flatten)]
    import: ImportArgs,
}

fn init_tracing(quiet: bool) -> Result<()> {
    let default_level = if quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet).ok();

    run_import(cli.import).await?;
    Ok(())
}
