//! Storefront order service
//!
//! Reads its configuration from the YAML file named by `STOREFRONT_CONFIG`
//! (defaults apply when unset). `STOREFRONT_BIND` overrides the bind address.

use anyhow::Result;
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::var("STOREFRONT_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            StorefrontConfig::from_yaml_file(&path)?
        }
        Err(_) => StorefrontConfig::default(),
    };

    if let Ok(bind) = std::env::var("STOREFRONT_BIND") {
        config.bind_address = bind;
    }

    tracing::info!(
        prefix = %config.api_prefix,
        phone = %config.whatsapp_phone,
        "Starting storefront-orders"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_order_store(InMemoryOrderStore::new())
        .serve()
        .await
}
