use anyhow::Result;
use persistence::DirectoryStore;
use tracing::info;

mod config;
mod logging;
mod run;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    logging::init_logging(&config.logging);

    info!("Starting contacts directory v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database).await?;
    let store = DirectoryStore::new(pool);

    run::demo(&store).await?;

    Ok(())
}
