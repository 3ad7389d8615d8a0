//! Request extractors

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that must deserialize and pass its `Validate` rules.
///
/// Both failures are reported as a 400 validation error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(
                    vec![json!({ "error": rejection.body_text() })],
                    "Invalid request body",
                )
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(field_details(&errors), "Invalid request body"))?;

        Ok(Self(value))
    }
}

/// Flatten field errors into `{"field", "error"}` entries, sorted by field.
pub fn field_details(errors: &ValidationErrors) -> Vec<serde_json::Value> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(move |error| json!({ "field": field, "error": error.code }))
        })
        .collect()
}
