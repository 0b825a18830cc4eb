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

async fn get(app: &TestApp, uri: &str) -> axum::response::Response {
    app.router
        .clone()
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn admin_post(app: &TestApp, token: &str, uri: &str, payload: &Value) -> axum::response::Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn amenity(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Heated rooftop pool with skyline vistas.",
        "category": category,
        "hours": "06:00 - 23:00",
        "images": ["https://images.example.com/pool.jpg"]
    })
}

#[tokio::test]
async fn test_amenities_filtered_and_sorted_by_name() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    for (name, category) in [
        ("Wellness Spa", "WELLNESS"),
        ("Fitness Lab", "FITNESS"),
        ("Infinity Pool", "LEISURE"),
        ("Business Lounge", "BUSINESS"),
    ] {
        let res = admin_post(&app, &token, "/api/v1/admin/amenities", &amenity(name, category)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = get(&app, "/api/v1/amenities").await;
    assert_eq!(res.status(), StatusCode::OK);
    let names: Vec<String> = parse_body(res)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Business Lounge", "Fitness Lab", "Infinity Pool", "Wellness Spa"]
    );

    let res = get(&app, "/api/v1/amenities?category=WELLNESS").await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Wellness Spa");

    let res = get(&app, "/api/v1/amenities?category=GARDENING").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_amenity_category_validated_on_create() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    let res = admin_post(&app, &token, "/api/v1/admin/amenities", &amenity("Pool", "SWIMMING")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "unknown amenity category");
}

#[tokio::test]
async fn test_dining_filter_by_type() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    let venue = |name: &str, venue_type: &str| {
        json!({
            "name": name,
            "type": venue_type,
            "floor": 45,
            "hours": "17:00 - 23:00",
            "description": "Progressive gastronomy with skyline dining.",
            "menuUrl": "https://example.com/menu.pdf",
            "images": ["https://images.example.com/dining.jpg"]
        })
    };

    for (name, venue_type) in [
        ("Quantum Kitchen", "FINE_DINING"),
        ("Cyber Cafe", "CAFE"),
        ("Neo Sushi Bar", "CASUAL"),
    ] {
        let res = admin_post(&app, &token, "/api/v1/admin/dining", &venue(name, venue_type)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = get(&app, "/api/v1/dining?type=CAFE").await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Cyber Cafe");
    assert_eq!(body[0]["type"], "CAFE");

    let res = get(&app, "/api/v1/dining").await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 3);

    let res = get(&app, "/api/v1/dining?type=FOOD_TRUCK").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_gallery_limit_and_category() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    for i in 0..5 {
        let item = json!({
            "title": format!("Exterior Shot {i}"),
            "category": "EXTERIOR",
            "imageUrl": "https://images.example.com/ext.jpg",
            "caption": "Night skyline"
        });
        let res = admin_post(&app, &token, "/api/v1/admin/gallery", &item).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }
    let room_shot = json!({
        "title": "Suite Interior",
        "category": "ROOM",
        "imageUrl": "https://images.example.com/room.jpg"
    });
    admin_post(&app, &token, "/api/v1/admin/gallery", &room_shot).await;

    let res = get(&app, "/api/v1/gallery?limit=3").await;
    assert_eq!(parse_body(res).await.as_array().unwrap().len(), 3);

    let res = get(&app, "/api/v1/gallery?category=ROOM").await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(body[0]["caption"].is_null());

    let res = get(&app, "/api/v1/gallery?limit=0").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = get(&app, "/api/v1/gallery?limit=101").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_testimonials_crud_and_rating_bounds() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    let res = admin_post(
        &app,
        &token,
        "/api/v1/admin/testimonials",
        &json!({ "guestName": "Ava Clarkson", "content": "Beyond imagination, truly.", "rating": 5 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;

    let res = admin_post(
        &app,
        &token,
        "/api/v1/admin/testimonials",
        &json!({ "guestName": "Jasper Lin", "content": "Great suite, will return.", "rating": 6 }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = get(&app, "/api/v1/testimonials").await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["guestName"], "Ava Clarkson");

    // Patch the rating down.
    let id = created["id"].as_i64().unwrap();
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/v1/admin/testimonials/{id}"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "rating": 4 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["rating"], 4);
}

#[tokio::test]
async fn test_events_sorted_by_date() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;

    let event = |title: &str, date: &str| {
        json!({
            "title": title,
            "description": "An evening of skyline entertainment.",
            "date": date,
            "venue": "Rooftop Deck"
        })
    };

    admin_post(&app, &token, "/api/v1/admin/events", &event("Rooftop Cinema", "2024-09-15T20:00:00Z")).await;
    admin_post(&app, &token, "/api/v1/admin/events", &event("Wine Tasting", "2024-08-01T18:00:00Z")).await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/admin/events")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Wine Tasting", "Rooftop Cinema"]);

    // Garbage dates are rejected at the boundary.
    let res = admin_post(&app, &token, "/api/v1/admin/events", &event("Bad Date", "next friday")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_reads_need_no_auth() {
    let app = TestApp::new().await;

    for uri in [
        "/api/v1/amenities",
        "/api/v1/dining",
        "/api/v1/gallery",
        "/api/v1/testimonials",
        "/api/v1/rooms",
    ] {
        let res = get(&app, uri).await;
        assert_eq!(res.status(), StatusCode::OK, "uri = {uri}");
        assert_eq!(parse_body(res).await.as_array().unwrap().len(), 0);
    }

    let res = get(&app, "/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["status"], "ok");
}
