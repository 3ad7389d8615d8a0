use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use voyage_kernel::settings::Settings;
use voyage_store::{shared, CatalogStore, SharedStore};

fn app_with(store: SharedStore) -> Router {
    let registry = voyage_app::build_registry(&store).unwrap();
    voyage_http::build_router(&registry, &Settings::default())
}

fn app() -> Router {
    app_with(shared(CatalogStore::with_fixtures()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn booking_body() -> Value {
    json!({
        "packageId": "pkg-3",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "",
        "travelers": 3,
        "departureDate": "2025-07-01T09:00:00Z",
        "returnDate": "2025-07-11T18:00:00Z",
        "totalPrice": "9897"
    })
}

#[tokio::test]
async fn lists_seeded_destinations_in_order() {
    let app = app();
    let (status, body) = get(&app, "/api/destinations").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Maldives", "Tokyo, Japan", "Paris, France", "Safari, Kenya"]);
}

#[tokio::test]
async fn destination_lookup_and_not_found() {
    let app = app();

    let (status, body) = get(&app, "/api/destinations/dest-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Maldives");
    assert_eq!(body["price"], "2499");
    assert_eq!(body["rating"], "4.8");
    assert_eq!(body["imageUrl"].as_str().unwrap().starts_with("https://"), true);

    let (status, body) = get(&app, "/api/destinations/dest-99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["message"], "Destination not found");
}

#[tokio::test]
async fn trip_packages_filter_by_category() {
    let app = app();

    let (_, all) = get(&app, "/api/trip-packages").await;
    assert_eq!(all.as_array().unwrap().len(), 9);

    let (_, all) = get(&app, "/api/trip-packages?category=all").await;
    assert_eq!(all.as_array().unwrap().len(), 9);

    let (status, luxury) = get(&app, "/api/trip-packages?category=luxury").await;
    assert_eq!(status, StatusCode::OK);
    let luxury = luxury.as_array().unwrap();
    assert_eq!(luxury.len(), 2);
    assert!(luxury.iter().all(|p| p["category"] == "luxury"));

    let (_, none) = get(&app, "/api/trip-packages?category=Luxury").await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn trip_package_lookup() {
    let app = app();

    let (status, body) = get(&app, "/api/trip-packages/pkg-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Maldives Paradise Retreat");
    assert_eq!(body["inclusions"].as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/trip-packages/pkg-0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Trip package not found");
}

#[tokio::test]
async fn flight_search_matches_substrings_ignoring_case() {
    let app = app();

    let (status, body) = get(&app, "/api/flights?from=nyc&to=lon").await;
    assert_eq!(status, StatusCode::OK);
    let flights = body.as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0]["airline"], "British Airways");
    assert_eq!(flights[0]["from"], "NYC");
    assert_eq!(flights[0]["class"], "economy");

    let (_, body) = get(&app, "/api/flights").await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (_, body) = get(&app, "/api/flights?from=lax").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn hotel_search_matches_location_or_name() {
    let app = app();

    let (status, body) = get(&app, "/api/hotels?location=tokyo").await;
    assert_eq!(status, StatusCode::OK);
    let hotels = body.as_array().unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0]["name"], "Tokyo Central Hotel");

    let (_, body) = get(&app, "/api/hotels?location=resort").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/api/hotels").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn booking_lifecycle() {
    let app = app();

    let (status, created) = send_json(&app, "POST", "/api/bookings", booking_body()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["packageId"], "pkg-3");
    assert!(created["phone"].is_null());
    assert_eq!(created["travelers"], 3);
    assert_eq!(created["totalPrice"], "9897");
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = get(&app, &format!("/api/bookings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{id}/status"),
        json!({ "status": "confirmed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "confirmed");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (_, fetched) = get(&app, &format!("/api/bookings/{id}")).await;
    assert_eq!(fetched["status"], "confirmed");
}

#[tokio::test]
async fn booking_status_errors() {
    let app = app();
    let (_, created) = send_json(&app, "POST", "/api/bookings", booking_body()).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) =
        send_json(&app, "PATCH", &format!("/api/bookings/{id}/status"), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Status is required");

    let (status, body) = send_json(
        &app,
        "PATCH",
        &format!("/api/bookings/{id}/status"),
        json!({ "status": "shipped" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let (status, body) = send_json(
        &app,
        "PATCH",
        "/api/bookings/missing/status",
        json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Booking not found");

    let (status, _) = get(&app, "/api/bookings/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_booking_is_rejected_with_400() {
    let app = app();

    let mut missing_name = booking_body();
    missing_name.as_object_mut().unwrap().remove("firstName");
    let (status, body) = send_json(&app, "POST", "/api/bookings", missing_name).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "validation_error");

    let mut bad_email = booking_body();
    bad_email["email"] = json!("ada-at-example");
    let (status, body) = send_json(&app, "POST", "/api/bookings", bad_email).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "email");

    let (status, _) = send(
        &app,
        Request::post("/api/bookings")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn client_supplied_status_is_ignored() {
    let app = app();
    let mut body = booking_body();
    body["status"] = json!("confirmed");

    let (status, created) = send_json(&app, "POST", "/api/bookings", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
}

#[tokio::test]
async fn contact_submission_returns_receipt() {
    let store = shared(CatalogStore::with_fixtures());
    let app = app_with(store.clone());

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/contacts",
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "subject": "Group discounts",
            "message": "Do you offer group rates for 12 travelers?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Contact form submitted successfully");
    let id = body["id"].as_str().unwrap();

    let contact = store.read().await.contact(id).unwrap();
    assert_eq!(contact.subject.as_deref(), Some("Group discounts"));
    assert_eq!(contact.phone, None);
    assert!(!contact.newsletter);
}

#[tokio::test]
async fn contact_without_message_is_rejected() {
    let app = app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/contacts",
        json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "message": ""
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["field"], "message");
}

#[tokio::test]
async fn unseeded_store_serves_empty_catalog() {
    let app = app_with(shared(CatalogStore::new()));

    let (status, body) = get(&app, "/api/destinations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = get(&app, "/api/destinations/dest-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = app();

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");

    for module in ["destinations", "trip-packages", "bookings", "contacts", "flights", "hotels"] {
        let (status, _) = get(&app, &format!("/api/{module}/health")).await;
        assert_eq!(status, StatusCode::OK, "{module} health");
    }
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = app();
    let (status, body) = get(&app, "/docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/destinations",
        "/api/destinations/{id}",
        "/api/trip-packages",
        "/api/trip-packages/{id}",
        "/api/bookings",
        "/api/bookings/{id}",
        "/api/bookings/{id}/status",
        "/api/contacts",
        "/api/flights",
        "/api/hotels",
        "/api/health",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
    assert!(body["components"]["schemas"]["Booking"].is_object());
}
