//! In-memory catalog store for destinations, trip packages, flights, hotels,
//! bookings, contact messages and users.

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod fixtures;
pub mod models;
pub mod store;

pub use models::*;
pub use store::{CatalogStats, CatalogStore};

/// Store handle shared by request handlers.
pub type SharedStore = Arc<RwLock<CatalogStore>>;

/// Wrap a store for use across request handlers.
pub fn shared(store: CatalogStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}
