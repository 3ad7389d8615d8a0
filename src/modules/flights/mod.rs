mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::{InitCtx, Module};
use voyage_store::SharedStore;

use crate::utils;

/// Flights module: origin/destination search
pub struct FlightsModule {
    store: SharedStore,
}

impl FlightsModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for FlightsModule {
    fn name(&self) -> &'static str {
        "flights"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let count = ctx.store.read().await.stats().flights;
        tracing::info!(module = self.name(), flights = count, "flights module initialized");
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
                        "summary": "Search flights",
                        "description": "Case-insensitive substring match on origin and destination codes. Both filters are optional.",
                        "tags": ["Flights"],
                        "parameters": [
                            utils::query_param("from", "Origin code fragment, e.g. nyc"),
                            utils::query_param("to", "Destination code fragment, e.g. lon")
                        ],
                        "responses": {
                            "200": utils::json_response("Matching flights", utils::array_of("Flight"))
                        }
                    }
                },
                "/health": utils::health_path("Flights")
            },
            "components": {
                "schemas": {
                    "Flight": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "airline": { "type": "string" },
                            "from": { "type": "string", "description": "Origin code" },
                            "to": { "type": "string", "description": "Destination code" },
                            "departureTime": { "type": "string", "example": "08:30" },
                            "arrivalTime": { "type": "string", "example": "15:45+1" },
                            "duration": { "type": "string", "example": "6h 15m" },
                            "stops": { "type": "integer", "minimum": 0 },
                            "price": utils::decimal("Fare per traveler"),
                            "class": { "type": "string", "description": "Fare class, economy unless stated" },
                            "createdAt": utils::timestamp("When the flight was added")
                        },
                        "required": [
                            "id", "airline", "from", "to", "departureTime", "arrivalTime",
                            "duration", "stops", "price", "class", "createdAt"
                        ]
                    }
                }
            }
        }))
    }
}

/// Create a new instance of the flights module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(FlightsModule::new(store))
}
