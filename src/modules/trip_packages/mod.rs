mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::{InitCtx, Module};
use voyage_store::SharedStore;

use crate::utils;

/// Trip packages module: package listing with category filtering
pub struct TripPackagesModule {
    store: SharedStore,
}

impl TripPackagesModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for TripPackagesModule {
    fn name(&self) -> &'static str {
        "trip-packages"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = ctx.store.read().await.stats().trip_packages;
        tracing::info!(
            module = self.name(),
            trip_packages = count,
            "trip packages module initialized"
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
                        "summary": "List trip packages",
                        "description": "Exact, case-sensitive category match. Omit the filter or pass `all` to list every package.",
                        "tags": ["Trip packages"],
                        "parameters": [
                            utils::query_param("category", "luxury, adventure, family, cultural or all")
                        ],
                        "responses": {
                            "200": utils::json_response("Matching packages", utils::array_of("TripPackage"))
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a trip package",
                        "tags": ["Trip packages"],
                        "parameters": [utils::path_id("Trip package id, e.g. pkg-1")],
                        "responses": {
                            "200": utils::json_response("The trip package", utils::schema_ref("TripPackage")),
                            "404": utils::error_response("Trip package not found")
                        }
                    }
                },
                "/health": utils::health_path("Trip packages")
            },
            "components": {
                "schemas": {
                    "TripPackage": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "description": { "type": "string" },
                            "imageUrl": { "type": "string", "format": "uri" },
                            "price": utils::decimal("Price per traveler"),
                            "duration": { "type": "integer", "description": "Length of the trip in days" },
                            "category": {
                                "type": "string",
                                "enum": ["luxury", "adventure", "family", "cultural"]
                            },
                            "rating": utils::decimal("Average rating out of 5"),
                            "inclusions": { "type": "array", "items": { "type": "string" } },
                            "location": { "type": "string" },
                            "createdAt": utils::timestamp("When the package was added")
                        },
                        "required": [
                            "id", "title", "description", "imageUrl", "price", "duration",
                            "category", "rating", "inclusions", "location", "createdAt"
                        ]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the trip packages module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(TripPackagesModule::new(store))
}
