mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::{InitCtx, Module};
use voyage_store::SharedStore;

use crate::utils;

/// Destinations module: read-only access to featured destinations
pub struct DestinationsModule {
    store: SharedStore,
}

impl DestinationsModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for DestinationsModule {
    fn name(&self) -> &'static str {
        "destinations"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = ctx.store.read().await.stats().destinations;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            destinations = count,
            "destinations module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List destinations",
                        "tags": ["Destinations"],
                        "responses": {
                            "200": utils::json_response("All destinations in catalog order", utils::array_of("Destination"))
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a destination",
                        "tags": ["Destinations"],
                        "parameters": [utils::path_id("Destination id, e.g. dest-1")],
                        "responses": {
                            "200": utils::json_response("The destination", utils::schema_ref("Destination")),
                            "404": utils::error_response("Destination not found")
                        }
                    }
                },
                "/health": utils::health_path("Destinations")
            },
            "components": {
                "schemas": {
                    "Destination": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "description": { "type": "string" },
                            "imageUrl": { "type": "string", "format": "uri" },
                            "price": utils::decimal("Starting price"),
                            "rating": utils::decimal("Average rating out of 5"),
                            "location": { "type": "string" },
                            "createdAt": utils::timestamp("When the destination was added")
                        },
                        "required": ["id", "name", "description", "imageUrl", "price", "rating", "location", "createdAt"]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the destinations module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(DestinationsModule::new(store))
}
