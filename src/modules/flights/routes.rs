use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use voyage_store::{Flight, SharedStore};

#[derive(Debug, Default, Deserialize)]
pub struct FlightSearch {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(search_flights))
        .route("/health", get(health_check))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "flights module is healthy"
}

async fn search_flights(
    State(store): State<SharedStore>,
    Query(search): Query<FlightSearch>,
) -> Json<Vec<Flight>> {
    let flights = store
        .read()
        .await
        .search_flights(search.from.as_deref(), search.to.as_deref());
    tracing::debug!(from = ?search.from, to = ?search.to, matches = flights.len(), "flight search");
    Json(flights)
}
