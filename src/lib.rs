//! Voyage application library
//!
//! Catalog modules (destinations, trip packages, bookings, contacts, flights,
//! hotels) and the bootstrap that wires them to the store and HTTP server.

use anyhow::Context;
use voyage_kernel::{
    settings::{CatalogSettings, Settings},
    InitCtx, ModuleRegistry,
};
use voyage_store::{CatalogStore, SharedStore};

pub mod modules;
pub mod utils;

/// Build the store once at startup, seeded unless disabled in settings
pub fn build_store(settings: &CatalogSettings) -> SharedStore {
    let store = if settings.seed_fixtures {
        CatalogStore::with_fixtures()
    } else {
        CatalogStore::new()
    };
    tracing::info!(stats = ?store.stats(), "catalog store ready");
    voyage_store::shared(store)
}

/// Registry with every catalog module bound to `store`
pub fn build_registry(store: &SharedStore) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store).context("failed to register modules")?;
    Ok(registry)
}

/// Run the service until a shutdown signal arrives
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(env = ?settings.environment, "voyage bootstrap starting");

    let store = build_store(&settings.catalog);
    let registry = build_registry(&store)?;
    let ctx = InitCtx {
        settings: &settings,
        store: &store,
    };

    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!("voyage bootstrap complete");

    let served = voyage_http::start_server(&registry, &settings).await;
    registry.stop_modules().await?;
    served
}
