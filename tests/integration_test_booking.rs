mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::TestApp;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_booking(app: &TestApp, payload: &Value) -> axum::response::Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/bookings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn booking_payload(room_id: i64) -> Value {
    json!({
        "roomId": room_id,
        "customerName": "Ava Clarkson",
        "customerEmail": "ava@example.com",
        "checkIn": "2024-03-01T14:00:00Z",
        "checkOut": "2024-03-03T11:00:00Z",
        "guests": 2
    })
}

async fn admin_booking_count(app: &TestApp, token: &str) -> usize {
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/admin/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    parse_body(res).await.as_array().unwrap().len()
}

#[tokio::test]
async fn test_partial_day_stay_bills_ceiling_nights() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;
    let room_id = room["id"].as_i64().unwrap();

    // 1 day 21 hours -> billed as 2 nights
    let res = post_booking(&app, &booking_payload(room_id)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["totalPrice"], "498.00");
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["paymentStatus"], "UNPAID");
    assert_eq!(body["roomId"], room_id);
    assert!(body["id"].as_i64().unwrap() > 0);

    // The response carries the room snapshot used for pricing.
    assert_eq!(body["room"]["slug"], "neo-standard");
    assert_eq!(body["room"]["price"], "249.00");
}

#[tokio::test]
async fn test_exact_full_day_bills_one_night() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Cyber Deluxe", "399.00").await;

    let mut payload = booking_payload(room["id"].as_i64().unwrap());
    payload["checkIn"] = json!("2024-03-01T00:00:00Z");
    payload["checkOut"] = json!("2024-03-02T00:00:00Z");

    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(parse_body(res).await["totalPrice"], "399.00");
}

#[tokio::test]
async fn test_checkout_not_after_checkin_rejected() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;
    let room_id = room["id"].as_i64().unwrap();

    let mut payload = booking_payload(room_id);
    payload["checkIn"] = json!("2024-03-03T11:00:00Z");
    payload["checkOut"] = json!("2024-03-01T14:00:00Z");

    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(res).await["error"],
        "Check-out must be after check-in"
    );

    // Equal timestamps are rejected too.
    let mut payload = booking_payload(room_id);
    payload["checkIn"] = json!("2024-03-01T14:00:00Z");
    payload["checkOut"] = json!("2024-03-01T14:00:00Z");
    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    assert_eq!(admin_booking_count(&app, &token).await, 0);
}

#[tokio::test]
async fn test_unknown_room_rejected_without_write() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    let res = post_booking(&app, &booking_payload(9999)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await["error"], "Selected room does not exist");

    assert_eq!(admin_booking_count(&app, &token).await, 0);
}

#[tokio::test]
async fn test_guests_outside_bounds_rejected() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;
    let room_id = room["id"].as_i64().unwrap();

    for guests in [0, 7, -1] {
        let mut payload = booking_payload(room_id);
        payload["guests"] = json!(guests);
        let res = post_booking(&app, &payload).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "guests = {guests}");
    }

    let mut payload = booking_payload(room_id);
    payload["guests"] = json!(6);
    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_unparsable_dates_rejected() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;

    let mut payload = booking_payload(room["id"].as_i64().unwrap());
    payload["checkIn"] = json!("first of March");

    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(res).await["error"],
        "Invalid check-in or check-out date"
    );
}

#[tokio::test]
async fn test_field_validation_rejects_before_write() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;
    let room_id = room["id"].as_i64().unwrap();

    let mut payload = booking_payload(room_id);
    payload["customerName"] = json!("A");
    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut payload = booking_payload(room_id);
    payload["customerEmail"] = json!("not-an-email");
    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let mut payload = booking_payload(room_id);
    payload["notes"] = json!("x".repeat(501));
    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Wrong field type never reaches the handler.
    let mut payload = booking_payload(room_id);
    payload["guests"] = json!("two");
    let res = post_booking(&app, &payload).await;
    assert!(res.status().is_client_error());

    assert_eq!(admin_booking_count(&app, &token).await, 0);
}

#[tokio::test]
async fn test_duplicate_submission_creates_two_bookings() {
    // No idempotency key exists; a retried submit is a second reservation.
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;
    let payload = booking_payload(room["id"].as_i64().unwrap());

    let first = post_booking(&app, &payload).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first_id = parse_body(first).await["id"].as_i64().unwrap();

    let second = post_booking(&app, &payload).await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let second_id = parse_body(second).await["id"].as_i64().unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(admin_booking_count(&app, &token).await, 2);
}

#[tokio::test]
async fn test_optional_fields_round_trip() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    let room = app.create_room(&token, "Neo Standard", "249.00").await;

    let mut payload = booking_payload(room["id"].as_i64().unwrap());
    payload["customerPhone"] = json!("+49 30 1234567");
    payload["notes"] = json!("Vegan breakfast please");

    let res = post_booking(&app, &payload).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["customerPhone"], "+49 30 1234567");
    assert_eq!(body["notes"], "Vegan breakfast please");

    let bare = post_booking(&app, &booking_payload(room["id"].as_i64().unwrap())).await;
    let bare_body = parse_body(bare).await;
    assert!(bare_body["customerPhone"].is_null());
    assert!(bare_body["notes"].is_null());
}
