use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use exercisectl_core::{Catalog, ImportPlan};
use tracing::info;

pub mod config;
pub mod db;
pub mod error;
pub mod importer;

pub use config::ExercisectlConfig;
pub use error::ImportError;
pub use importer::{import_catalog, ImportReport};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Catalog JSON document (default: config `import.source`, then data/exercises.json)
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Parse and plan the import without touching the database
    #[arg(long)]
    pub dry_run: bool,
}

/// Load the catalog and import it, honoring `--dry-run`.
pub async fn run_import(args: ImportArgs) -> Result<ImportReport> {
    config::load_dotenv()?;
    let cfg = ExercisectlConfig::load();

    let source = cfg.source_path(args.input);
    let catalog = Catalog::from_path(&source)
        .with_context(|| format!("failed to load catalog {}", source.display()))?;
    info!("loaded {} exercises from {}", catalog.len(), source.display());

    if args.dry_run {
        let plan = ImportPlan::build(&catalog).context("catalog cannot be imported")?;
        info!(
            "dry-run: would import {} exercises, {} muscles, {} links",
            plan.len(),
            plan.distinct_muscles().len(),
            plan.links().len()
        );
        return Ok(ImportReport::default());
    }

    // clap reads DATABASE_URL before .env files are loaded
    let database_url = match args.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL").context("DATABASE_URL not set")?,
    };

    let pool = match cfg.database.max_connections {
        Some(max_connections) => db::create_pool_with_options(&database_url, max_connections).await,
        None => db::create_pool(&database_url).await,
    }
    .map_err(ImportError::connection)
    .context("failed to connect to database")?;

    let report = import_catalog(&pool, &catalog)
        .await
        .context("import failed, no changes were committed")?;
    pool.close().await;

    Ok(report)
}
