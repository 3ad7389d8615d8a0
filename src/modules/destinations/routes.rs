use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use voyage_http::AppError;
use voyage_store::{Destination, SharedStore};

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_destinations))
        .route("/health", get(health_check))
        .route("/{id}", get(get_destination))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "destinations module is healthy"
}

async fn list_destinations(State(store): State<SharedStore>) -> Json<Vec<Destination>> {
    Json(store.read().await.all_destinations())
}

async fn get_destination(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Destination>, AppError> {
    store
        .read()
        .await
        .destination(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Destination not found"))
}
