use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product gateway entry point
///
/// Loads configuration, wires the two RPC backends into the product use cases
/// and serves the HTTP surface:
/// - config/: server, CORS, correlation header and RPC backend addresses
/// - setup/: dependency injection and server setup
/// - api/: path router, product endpoint, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
