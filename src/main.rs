use anyhow::Result;
use bistro::cli::Cli;
use bistro::entities::RestaurantModule;
use bistro::server::ServerBuilder;
use bistro::storage::RestaurantStores;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse_args();
    let config = cli.load_config()?;

    tracing::info!(
        bind = %config.server.bind,
        backend = ?config.storage.backend,
        "starting bistro"
    );

    let stores = RestaurantStores::open(&config.storage)?;

    ServerBuilder::new()
        .with_config(config)
        .register_module(RestaurantModule::new(stores))
        .serve()
        .await
}
