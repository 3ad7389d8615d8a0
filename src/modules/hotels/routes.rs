use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use voyage_store::{Hotel, SharedStore};

#[derive(Debug, Default, Deserialize)]
pub struct HotelSearch {
    pub location: Option<String>,
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(search_hotels))
        .route("/health", get(health_check))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "hotels module is healthy"
}

async fn search_hotels(
    State(store): State<SharedStore>,
    Query(search): Query<HotelSearch>,
) -> Json<Vec<Hotel>> {
    Json(store.read().await.search_hotels(search.location.as_deref()))
}
