mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::TestApp;
use lumina_hotel_api::domain::models::user::NewUser;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_json(app: &TestApp, uri: &str, token: Option<&str>, payload: &Value) -> axum::response::Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.router
        .clone()
        .oneshot(builder.body(Body::from(payload.to_string())).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_seed_admin_only_works_once() {
    let app = TestApp::new().await;
    let payload = json!({ "email": "first@lumina.test", "password": "Sup3rSecret!" });

    let res = post_json(&app, "/api/v1/admin/auth/seed-admin", None, &payload).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["email"], "first@lumina.test");
    assert_eq!(body["role"], "ADMIN");

    let again = json!({ "email": "second@lumina.test", "password": "Sup3rSecret!" });
    let res = post_json(&app, "/api/v1/admin/auth/seed-admin", None, &again).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "Admin already exists");
}

#[tokio::test]
async fn test_login_returns_token_and_profile() {
    let app = TestApp::new().await;
    let token = app.seed_admin_and_login().await;
    assert!(!token.is_empty());

    let res = post_json(
        &app,
        "/api/v1/admin/auth/login",
        None,
        &json!({ "email": "admin@lumina.test", "password": "Sup3rSecret!" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "admin@lumina.test");
    assert_eq!(body["user"]["role"], "ADMIN");

    // The hash must never appear in a response body.
    let user = body["user"].as_object().unwrap();
    assert!(!user.contains_key("password"));
    assert!(!user.contains_key("passwordHash"));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = TestApp::new().await;
    app.seed_admin_and_login().await;

    let res = post_json(
        &app,
        "/api/v1/admin/auth/login",
        None,
        &json!({ "email": "admin@lumina.test", "password": "WrongPassword" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(parse_body(res).await["error"], "Invalid credentials");

    let res = post_json(
        &app,
        "/api/v1/admin/auth/login",
        None,
        &json!({ "email": "nobody@lumina.test", "password": "Sup3rSecret!" }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_is_admin_gated() {
    let app = TestApp::new().await;

    let payload = json!({ "email": "colleague@lumina.test", "password": "An0therSecret!" });
    let res = post_json(&app, "/api/v1/admin/auth/register", None, &payload).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = app.seed_admin_and_login().await;
    let res = post_json(&app, "/api/v1/admin/auth/register", Some(&token), &payload).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same email again is rejected.
    let res = post_json(&app, "/api/v1/admin/auth/register", Some(&token), &payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["error"], "User already exists");

    // Short passwords never reach the user table.
    let weak = json!({ "email": "weak@lumina.test", "password": "short" });
    let res = post_json(&app, "/api/v1/admin/auth/register", Some(&token), &weak).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_admin_role_is_forbidden() {
    let app = TestApp::new().await;
    app.seed_admin_and_login().await;

    let password_hash = app.state.auth_service.hash_password("StaffSecret1").unwrap();
    let staff = app
        .state
        .user_repo
        .create(&NewUser {
            email: "staff@lumina.test".into(),
            password_hash,
            role: "STAFF".into(),
        })
        .await
        .unwrap();

    let staff_token = app.state.auth_service.issue_token(&staff).unwrap();

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/admin/rooms")
                .header(header::AUTHORIZATION, format!("Bearer {staff_token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
