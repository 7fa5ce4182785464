//! `NutriBuddy` server binary.
//!
//! Wires configuration, the database, user seeding, the blob store, and the
//! HTTP router together, then serves until shutdown.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nutri_buddy::{
    api::{self, ApiState},
    blob::FileStore,
    config,
    core::user,
    errors::Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Initialize database
    let db = config::database::create_connection(&app_config.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;
    config::database::create_tables(&db).await?;

    // 5. Seed configured user accounts
    user::seed_users(&db, &app_config.users)
        .await
        .inspect(|_| info!("Configured users seeded successfully."))
        .inspect_err(|e| error!("Failed to seed users: {}", e))?;

    // 6. Open the blob store
    let blob = Arc::new(FileStore::open(&app_config.blob_dir)?);

    // 7. Serve the API
    let app = api::build_router(ApiState { db, blob });
    let listener = tokio::net::TcpListener::bind(&app_config.listen_addr).await?;
    info!("Listening on {}", app_config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
