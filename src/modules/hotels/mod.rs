mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::{InitCtx, Module};
use voyage_store::SharedStore;

use crate::utils;

/// Hotels module: location/name search
pub struct HotelsModule {
    store: SharedStore,
}

impl HotelsModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for HotelsModule {
    fn name(&self) -> &'static str {
        "hotels"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = ctx.store.read().await.stats().hotels;
        tracing::info!(module = self.name(), hotels = count, "hotels module initialized");
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
                        "summary": "Search hotels",
                        "description": "Case-insensitive substring match against hotel location or name.",
                        "tags": ["Hotels"],
                        "parameters": [
                            utils::query_param("location", "City, country or hotel name fragment")
                        ],
                        "responses": {
                            "200": utils::json_response("Matching hotels", utils::array_of("Hotel"))
                        }
                    }
                },
                "/health": utils::health_path("Hotels")
            },
            "components": {
                "schemas": {
                    "Hotel": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "location": { "type": "string" },
                            "imageUrl": { "type": "string", "format": "uri" },
                            "rating": utils::decimal("Average guest rating out of 5"),
                            "pricePerNight": utils::decimal("Nightly rate"),
                            "amenities": { "type": "array", "items": { "type": "string" } },
                            "description": { "type": "string" },
                            "starRating": { "type": "integer", "minimum": 1, "maximum": 5 },
                            "distanceFromCenter": utils::nullable_string("Distance to a local landmark"),
                            "createdAt": utils::timestamp("When the hotel was added")
                        },
                        "required": [
                            "id", "name", "location", "imageUrl", "rating", "pricePerNight",
                            "amenities", "description", "starRating", "distanceFromCenter", "createdAt"
                        ]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the hotels module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(HotelsModule::new(store))
}
