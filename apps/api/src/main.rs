use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{PgProductRepository, ProductService};
use tracing::info;

mod config;
mod openapi;
mod ready;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Connect with retry so the service survives a database that is
    // still starting up
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Apply pending schema migrations before serving traffic
    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;

    let repository = PgProductRepository::new(db.clone());
    let service = ProductService::new(repository);

    let api_routes = Router::new().nest("/product", domain_products::handlers::router(service));

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes)?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual database ping
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(ready::ready_router(db.clone()));

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );

    create_app(app, &config.server).await?;

    info!("Shutting down: closing database connection");
    if let Err(e) = db.close().await {
        tracing::error!("Error closing PostgreSQL connection: {}", e);
    }

    info!("Product API shutdown complete");
    Ok(())
}
