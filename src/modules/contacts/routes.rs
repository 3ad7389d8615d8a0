use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use voyage_http::ValidJson;
use voyage_store::{CreateContact, SharedStore};

const RECEIPT_MESSAGE: &str = "Contact form submitted successfully";

/// Acknowledgement returned for a stored contact message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactReceipt {
    pub message: String,
    pub id: String,
}

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", post(create_contact))
        .route("/health", get(health_check))
        .with_state(store)
}

async fn health_check() -> &'static str {
    "contacts module is healthy"
}

async fn create_contact(
    State(store): State<SharedStore>,
    ValidJson(input): ValidJson<CreateContact>,
) -> (StatusCode, Json<ContactReceipt>) {
    let contact = store.write().await.create_contact(input);
    (
        StatusCode::CREATED,
        Json(ContactReceipt {
            message: RECEIPT_MESSAGE.to_string(),
            id: contact.id,
        }),
    )
}
