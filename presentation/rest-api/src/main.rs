use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog REST API.
///
/// Boot order: environment, tracing, configuration, database (with
/// migrations), use case wiring, then the HTTP listener.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();
    let pool = database_config::init_database().await?;
    let container = DependencyContainer::new(pool, config.pagination);

    Server::run(config, container).await
}

/// Falls back to `info` when RUST_LOG is unset or invalid.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
