pub mod bookings;
pub mod contacts;
pub mod destinations;
pub mod flights;
pub mod hotels;
pub mod trip_packages;

use voyage_kernel::ModuleRegistry;
use voyage_store::SharedStore;

/// Register every catalog module against the shared store
pub fn register_all(registry: &mut ModuleRegistry, store: &SharedStore) -> anyhow::Result<()> {
    registry.register(destinations::create_module(store.clone()))?;
    registry.register(trip_packages::create_module(store.clone()))?;
    registry.register(bookings::create_module(store.clone()))?;
    registry.register(contacts::create_module(store.clone()))?;
    registry.register(flights::create_module(store.clone()))?;
    registry.register(hotels::create_module(store.clone()))?;
    Ok(())
}
