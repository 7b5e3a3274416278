use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use whenmeet_api::config::ApiConfig;
use whenmeet_core::{service::PollService, store::EventStore};
use whenmeet_db::{PgEventStore, create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Connect the event store only when a database is configured
    let store: Option<Arc<dyn EventStore>> = match &config.database_url {
        Some(database_url) => {
            let db_pool = create_pool(database_url).await?;
            initialize_database(&db_pool).await?;
            let store: Arc<dyn EventStore> = Arc::new(PgEventStore::new(db_pool));
            Some(store)
        }
        None => None,
    };

    // Start API server
    whenmeet_api::start_server(config, PollService::new(store)).await?;

    Ok(())
}
