//! BioGRID Importer - interaction data import tool

use anyhow::Result;
use biogrid_common::logging::{init_logging, LogConfig, LogLevel};
use biogrid_ingest::db::{create_pool, DbConfig};
use biogrid_ingest::ingest::pipeline::ImportPipeline;
use biogrid_ingest::ingest::storage::BiogridStorage;
use clap::Parser;
use serde_json::json;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "biogrid-ingest")]
#[command(author, version, about = "BioGRID interaction data import tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Import a BioGRID TSV export into the store
    Import {
        /// Path to the TSV export
        #[arg(short, long)]
        file: String,

        /// Database URL (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,

        /// Keep existing tables instead of dropping and recreating them
        #[arg(long)]
        no_reset: bool,
    },

    /// Print row counts for the three entity tables
    Counts {
        /// Database URL (overrides DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },
}

fn db_config(database_url: Option<String>) -> Result<DbConfig> {
    let mut config = DbConfig::from_env()?;
    if let Some(url) = database_url {
        config.url = url;
    }
    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging from the environment; the verbose flag wins
    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    match cli.command {
        Command::Import {
            file,
            database_url,
            no_reset,
        } => {
            let config = db_config(database_url)?;
            let pool = create_pool(&config).await?;
            let pipeline = ImportPipeline::new(pool);

            if !no_reset {
                pipeline.storage().reset().await?;
            }

            let stats = pipeline.run(&file).await?;
            info!(
                organisms = stats.organisms_inserted,
                proteins = stats.proteins_inserted,
                interactions = stats.interactions_inserted,
                skipped = stats.skipped(),
                "Import complete"
            );
        },
        Command::Counts { database_url } => {
            let config = db_config(database_url)?;
            let pool = create_pool(&config).await?;
            let storage = BiogridStorage::new(pool);

            let counts = json!({
                "organisms": storage.count_organisms().await?,
                "proteins": storage.count_proteins().await?,
                "interactions": storage.count_interactions().await?,
            });
            println!("{}", serde_json::to_string_pretty(&counts)?);
        },
    }

    Ok(())
}
