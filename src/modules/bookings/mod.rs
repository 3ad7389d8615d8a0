mod routes;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use voyage_kernel::{InitCtx, Module};
use voyage_store::SharedStore;

use crate::utils;

/// Bookings module: booking creation, lookup and status changes
pub struct BookingsModule {
    store: SharedStore,
}

impl BookingsModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "bookings module initialized"
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
                    "post": {
                        "summary": "Create a booking",
                        "description": "New bookings start in `pending` status. The package reference is stored as given.",
                        "tags": ["Bookings"],
                        "requestBody": utils::json_body(utils::schema_ref("CreateBooking")),
                        "responses": {
                            "201": utils::json_response("Booking created", utils::schema_ref("Booking")),
                            "400": utils::error_response("Invalid booking data")
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Get a booking",
                        "tags": ["Bookings"],
                        "parameters": [utils::path_id("Booking id")],
                        "responses": {
                            "200": utils::json_response("The booking", utils::schema_ref("Booking")),
                            "404": utils::error_response("Booking not found")
                        }
                    }
                },
                "/{id}/status": {
                    "patch": {
                        "summary": "Change booking status",
                        "description": "Any of pending, confirmed or cancelled may replace the current status.",
                        "tags": ["Bookings"],
                        "parameters": [utils::path_id("Booking id")],
                        "requestBody": utils::json_body(utils::schema_ref("BookingStatusUpdate")),
                        "responses": {
                            "200": utils::json_response("Updated booking", utils::schema_ref("Booking")),
                            "400": utils::error_response("Status missing or not recognised"),
                            "404": utils::error_response("Booking not found")
                        }
                    }
                },
                "/health": utils::health_path("Bookings")
            },
            "components": {
                "schemas": {
                    "BookingStatus": {
                        "type": "string",
                        "enum": ["pending", "confirmed", "cancelled"]
                    },
                    "Booking": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "packageId": utils::nullable_string("Referenced trip package"),
                            "firstName": { "type": "string" },
                            "lastName": { "type": "string" },
                            "email": { "type": "string", "format": "email" },
                            "phone": utils::nullable_string("Contact phone number"),
                            "travelers": { "type": "integer", "minimum": 1 },
                            "departureDate": utils::timestamp("Departure date"),
                            "returnDate": {
                                "type": ["string", "null"],
                                "format": "date-time",
                                "description": "Return date"
                            },
                            "totalPrice": utils::decimal("Total price for all travelers"),
                            "status": utils::schema_ref("BookingStatus"),
                            "createdAt": utils::timestamp("When the booking was made")
                        },
                        "required": [
                            "id", "packageId", "firstName", "lastName", "email", "phone", "travelers",
                            "departureDate", "returnDate", "totalPrice", "status", "createdAt"
                        ]
                    },
                    "CreateBooking": {
                        "type": "object",
                        "properties": {
                            "packageId": utils::nullable_string("Trip package being booked"),
                            "firstName": { "type": "string", "minLength": 1 },
                            "lastName": { "type": "string", "minLength": 1 },
                            "email": { "type": "string", "format": "email" },
                            "phone": utils::nullable_string("Contact phone number"),
                            "travelers": { "type": "integer", "minimum": 1 },
                            "departureDate": utils::timestamp("Departure date"),
                            "returnDate": {
                                "type": ["string", "null"],
                                "format": "date-time"
                            },
                            "totalPrice": utils::decimal("Total price for all travelers")
                        },
                        "required": ["firstName", "lastName", "email", "travelers", "departureDate", "totalPrice"]
                    },
                    "BookingStatusUpdate": {
                        "type": "object",
                        "properties": {
                            "status": utils::schema_ref("BookingStatus")
                        },
                        "required": ["status"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let bookings = self.store.read().await.stats().bookings;
        tracing::info!(
            module = self.name(),
            bookings,
            "bookings module stopped; in-memory bookings are discarded"
        );
        Ok(())
    }
}

/// Create a new instance of the bookings module
pub fn create_module(store: SharedStore) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookingsModule::new(store))
}
