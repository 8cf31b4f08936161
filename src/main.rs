use anyhow::Result;
use grubdash::config::AppConfig;
use grubdash::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

/// Config path from the first argument, then `GRUBDASH_CONFIG`
fn config_path() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("GRUBDASH_CONFIG").ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load(config_path().as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        dishes = config.seed.dishes.len(),
        orders = config.seed.orders.len(),
        "starting grubdash"
    );

    ServerBuilder::new().with_config(config).serve().await
}
