use std::sync::Arc;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use laresa_api::{app, AppState};
use laresa_core::{Booker, BookingParams, City, Guest, Reservation};
use laresa_store::{InMemoryNotificationSink, InMemoryReservationStore, UuidV7Generator};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> (Router, Arc<InMemoryReservationStore>, Arc<InMemoryNotificationSink>) {
    let store = Arc::new(InMemoryReservationStore::new());
    let sink = Arc::new(InMemoryNotificationSink::new());
    let booker = Booker::new(store.clone(), sink.clone(), Arc::new(UuidV7Generator));
    (app(AppState::new(Arc::new(booker))), store, sink)
}

fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap()
}

fn params_json(departure_date: i64, departure: &str, destination: &str, guests: &[&str]) -> Value {
    json!({
        "departureDate": departure_date,
        "departureCity": { "name": departure },
        "destinationCity": { "name": destination },
        "distance": 5836.5,
        "guests": guests.iter().map(|name| json!({ "name": name })).collect::<Vec<_>>(),
    })
}

async fn post(app: &Router, email: &str, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/customers/{}/reservations", email))
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_invalid_body_is_a_bad_request() {
    let (app, store, _) = test_app();

    let (status, _) = post(&app, "bruno@gacio.org", "`").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_incomplete_params_are_bad_requests() {
    let (app, store, sink) = test_app();

    let missing_departure_city = json!({
        "departureDate": now_nanos(),
        "destinationCity": { "name": "New-York" },
    });
    let missing_destination_city = json!({
        "departureDate": now_nanos(),
        "departureCity": { "name": "Paris" },
    });
    let missing_departure_date = json!({
        "departureCity": { "name": "Paris" },
        "destinationCity": { "name": "New-York" },
    });

    for body in [missing_departure_city, missing_destination_city, missing_departure_date] {
        let (status, bytes) = post(&app, "jon@doe.org", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "missing booking parameters");
    }

    assert!(store.is_empty().await);
    assert!(sink.published().is_empty());
}

#[tokio::test]
async fn test_too_many_guests_is_a_server_error() {
    let (app, store, sink) = test_app();
    let body = params_json(now_nanos(), "Paris", "New-York", &["Jean", "Benoît", "Pierre", "Marie"]);

    let (status, bytes) = post(&app, "jon@doe.org", body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["error"], "can't have more than three guests");
    assert!(store.is_empty().await);
    assert!(sink.published().is_empty());
}

#[tokio::test]
async fn test_booked_reservation_is_readable() {
    let (app, _, sink) = test_app();
    let body = params_json(now_nanos(), "Paris", "New-York", &["Bob Sap", "Mike Tyson"]);

    let (status, bytes) = post(&app, "jon@doe.org", body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let booked: Reservation = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(booked.customer.email, "jon@doe.org");
    assert_eq!(sink.published(), vec![booked.clone()]);

    let uri = format!("/customers/{}/reservations/{}", booked.customer.email, booked.id);
    for _ in 0..2 {
        let (status, bytes) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Reservation = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(fetched, booked);
    }
}

#[tokio::test]
async fn test_reservation_readable_under_any_email() {
    let (app, _, _) = test_app();
    let body = params_json(now_nanos(), "Paris", "New-York", &[]);

    let (_, bytes) = post(&app, "jon@doe.org", body.to_string()).await;
    let booked: Reservation = serde_json::from_slice(&bytes).unwrap();

    let (status, _) = get(&app, &format!("/customers/someone@else.org/reservations/{}", booked.id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_reservation_is_a_server_error() {
    let (app, _, _) = test_app();

    let (status, bytes) = get(&app, "/customers/jon@doe.org/reservations/123").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["error"], "reservation not found");
}

#[tokio::test]
async fn test_monday_booking_price() {
    let (app, _, _) = test_app();
    let monday = Utc.with_ymd_and_hms(2022, 6, 20, 0, 0, 0).unwrap().timestamp_nanos_opt().unwrap();
    let body = params_json(monday, "Paris", "New-York", &[]);

    let (status, bytes) = post(&app, "jon@doe.org", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let booked: Reservation = serde_json::from_slice(&bytes).unwrap();
    assert!((booked.price - 5836.5 * 50.7).abs() < 1e-6);
    assert_eq!(booked.departure_date, monday);
    assert_eq!(booked.distance, 5836.5);
}

#[tokio::test]
async fn test_notification_failure_keeps_reservation() {
    let store = Arc::new(InMemoryReservationStore::new());
    let booker = Booker::new(
        store.clone(),
        Arc::new(InMemoryNotificationSink::failing()),
        Arc::new(|| "xyz".to_string()),
    );
    let app = app(AppState::new(Arc::new(booker)));
    let body = params_json(now_nanos(), "Paris", "New-York", &[]);

    let (status, _) = post(&app, "jon@doe.org", body.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, bytes) = get(&app, "/customers/jon@doe.org/reservations/xyz").await;
    assert_eq!(status, StatusCode::OK);
    let stored: Reservation = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(stored.id, "xyz");
}

#[tokio::test]
async fn test_health() {
    let (app, _, _) = test_app();

    let (status, bytes) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_params_round_trip_through_boundary() {
    let params = BookingParams {
        departure_date: now_nanos(),
        departure_city: City::new("Paris"),
        destination_city: City::new("New-York"),
        distance: 5836.5,
        guests: vec![Guest::new("Bob Ross")],
    };
    let (app, store, _) = test_app();

    let (status, bytes) = post(&app, "jon@doe.org", serde_json::to_vec(&params).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    let booked: Reservation = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(booked.departure_city, params.departure_city);
    assert_eq!(booked.destination_city, params.destination_city);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_null_guests_and_distance_are_accepted() {
    let (app, store, _) = test_app();
    let body = json!({
        "departureDate": now_nanos(),
        "departureCity": { "name": "Paris" },
        "destinationCity": { "name": "New-York" },
        "distance": null,
        "guests": null,
    });

    let (status, bytes) = post(&app, "jon@doe.org", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let booked: Reservation = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(booked.distance, 0.0);
    assert_eq!(store.len().await, 1);
}
