use anyhow::{Context, Result};
use clap::Parser;
use dvdstore_config::{ConfigLoader, DvdStoreConfig};
use dvdstore_storage::DatabaseConnection;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Load configuration and fold in command line overrides
fn load_config(cli: &Cli) -> Result<DvdStoreConfig> {
    let loader = ConfigLoader::new();
    let mut config = loader
        .load(cli.config.as_ref())
        .context("Failed to load configuration")?;

    if let Some(level) = &cli.log_level {
        config.logging.level = level
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --log-level: {}", e))?;
    }

    Ok(config)
}

fn init_tracing(config: &DvdStoreConfig) {
    let filter = EnvFilter::try_new(config.logging.env_filter_directives())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(command: Commands, db: &DatabaseConnection) -> Result<()> {
    // Fail fast on a database that does not match the declared schema
    db.verify_schema()
        .await
        .context("Schema verification failed")?;

    match command {
        Commands::Demo {
            actor_id,
            released_on_or_after,
            top,
            inventory_below,
        } => commands::demo(db, actor_id, released_on_or_after, top, inventory_below).await,
        Commands::Overdue { as_of, limit } => commands::overdue(db, as_of.as_deref(), limit).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config);

    debug!("Configuration loaded and validated");

    let db = DatabaseConnection::new(config.database.clone())
        .await
        .context("Failed to connect to database")?;
    debug!(
        "Connected with a pool of up to {} connections",
        db.get_config().max_connections
    );

    // Run the command, then close the pool whether it succeeded or not
    let outcome = run(cli.command, &db).await;

    if let Err(err) = db.close().await {
        error!("Failed to close database connection: {}", err);
    } else {
        info!("Database connection closed");
    }

    outcome
}
