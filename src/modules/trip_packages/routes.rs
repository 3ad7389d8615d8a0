use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use voyage_http::AppError;
use voyage_store::{SharedStore, TripPackage};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_trip_packages))
        .route("/health", get(health_check))
        .route("/{id}", get(get_trip_package))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "trip packages module is healthy"
}

async fn list_trip_packages(
    State(store): State<SharedStore>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<TripPackage>> {
    let packages = store
        .read()
        .await
        .trip_packages_by_category(filter.category.as_deref());
    Json(packages)
}

async fn get_trip_package(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<TripPackage>, AppError> {
    store
        .read()
        .await
        .trip_package(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Trip package not found"))
}
