mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::Module;
use voyage_store::SharedStore;

use crate::utils;

pub use routes::ContactReceipt;

/// Contacts module: stores contact-form submissions
pub struct ContactsModule {
    store: SharedStore,
}

impl ContactsModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for ContactsModule {
    fn name(&self) -> &'static str {
        "contacts"
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Submit a contact message",
                        "tags": ["Contacts"],
                        "requestBody": utils::json_body(utils::schema_ref("CreateContact")),
                        "responses": {
                            "201": utils::json_response("Message stored", utils::schema_ref("ContactReceipt")),
                            "400": utils::error_response("Invalid contact data")
                        }
                    }
                },
                "/health": utils::health_path("Contacts")
            },
            "components": {
                "schemas": {
                    "CreateContact": {
                        "type": "object",
                        "properties": {
                            "firstName": { "type": "string", "minLength": 1 },
                            "lastName": { "type": "string", "minLength": 1 },
                            "email": { "type": "string", "format": "email" },
                            "phone": utils::nullable_string("Contact phone number"),
                            "subject": utils::nullable_string("Message subject"),
                            "message": { "type": "string", "minLength": 1 },
                            "newsletter": { "type": ["boolean", "null"], "description": "Newsletter opt-in, defaults to false" }
                        },
                        "required": ["firstName", "lastName", "email", "message"]
                    },
                    "ContactReceipt": {
                        "type": "object",
                        "properties": {
                            "message": { "type": "string" },
                            "id": { "type": "string" }
                        },
                        "required": ["message", "id"]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the contacts module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(ContactsModule::new(store))
}
