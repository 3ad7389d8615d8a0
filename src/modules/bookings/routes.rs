use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use validator::Validate;
use voyage_http::{AppError, ValidJson};
use voyage_store::{Booking, BookingStatus, CreateBooking, SharedStore};

/// Body of a status change. A missing status is rejected by the handler.
#[derive(Debug, Deserialize, Validate)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", post(create_booking))
        .route("/health", get(health_check))
        .route("/{id}", get(get_booking))
        .route("/{id}/status", patch(update_booking_status))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "bookings module is healthy"
}

async fn create_booking(
    State(store): State<SharedStore>,
    ValidJson(input): ValidJson<CreateBooking>,
) -> (StatusCode, Json<Booking>) {
    let booking = store.write().await.create_booking(input);
    (StatusCode::CREATED, Json(booking))
}

async fn get_booking(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    store
        .read()
        .await
        .booking(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Booking not found"))
}

async fn update_booking_status(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    ValidJson(update): ValidJson<StatusUpdate>,
) -> Result<Json<Booking>, AppError> {
    let status = update
        .status
        .ok_or_else(|| AppError::bad_request("Status is required"))?;

    store
        .write()
        .await
        .update_booking_status(&id, status)
        .map(Json)
        .ok_or_else(|| AppError::not_found("Booking not found"))
}
