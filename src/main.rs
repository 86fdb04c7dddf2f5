use std::sync::Arc;

use anyhow::Context;
use diesel_migrations::MigrationHarness;

use cinelog::api::{build_router, AppState};
use cinelog::log_info;
use cinelog::shared::utils::logger::init_logger;
use cinelog::shared::{Config, Database};
use cinelog::MIGRATIONS;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = Config::load().context("Failed to load configuration")?;
    let database =
        Arc::new(Database::new(&config.database_url).context("Failed to initialize database")?);

    run_migrations(&database).await?;

    let port = config.port;
    let state = AppState::build(config, database);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    log_info!("Server running on port {}", port);
    axum::serve(listener, router).await?;

    Ok(())
}

async fn run_migrations(database: &Arc<Database>) -> anyhow::Result<()> {
    let db = Arc::clone(database);

    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let mut conn = db.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
        if !applied.is_empty() {
            log_info!("Applied {} pending database migrations", applied.len());
        }
        Ok(())
    })
    .await?
}
