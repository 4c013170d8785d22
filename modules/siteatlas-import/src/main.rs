use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use siteatlas_common::Config;
use siteatlas_import::{ImportJob, ImportParams};
use siteatlas_registry::{migrate::migrate, PgRegistry};

/// Import a locations CSV into the site registry.
#[derive(Parser)]
#[command(name = "siteatlas-import")]
struct Args {
    /// Path to the locations CSV (header: state,city,name).
    csv_file: PathBuf,

    /// Log every node the run creates.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("siteatlas=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let registry = PgRegistry::connect(&config.database_url).await?;
    info!("Connected to database");

    migrate(registry.pool()).await?;

    info!(file = %args.csv_file.display(), "Starting location import");
    let file = File::open(&args.csv_file)?;

    let job = ImportJob::new(Arc::new(registry));
    let stats = job
        .run(ImportParams::new(file).with_debug(args.debug))
        .await?;

    info!("{stats}");
    Ok(())
}
