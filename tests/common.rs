use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use lumina_hotel_api::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_amenity_repo::SqliteAmenityRepo, sqlite_booking_repo::SqliteBookingRepo,
        sqlite_dining_repo::SqliteDiningRepo, sqlite_event_repo::SqliteEventRepo,
        sqlite_gallery_repo::SqliteGalleryRepo, sqlite_room_repo::SqliteRoomRepo,
        sqlite_testimonial_repo::SqliteTestimonialRepo, sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret-key".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            amenity_repo: Arc::new(SqliteAmenityRepo::new(pool.clone())),
            dining_repo: Arc::new(SqliteDiningRepo::new(pool.clone())),
            gallery_repo: Arc::new(SqliteGalleryRepo::new(pool.clone())),
            testimonial_repo: Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            auth_service: Arc::new(AuthService::new(&config)),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Bootstraps the first admin through the open seed endpoint and returns
    /// a bearer token for it.
    pub async fn seed_admin_and_login(&self) -> String {
        let payload = json!({
            "email": "admin@lumina.test",
            "password": "Sup3rSecret!"
        });

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/auth/seed-admin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_success() {
            panic!("seed-admin failed in test helper: status {}", response.status());
        }

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if !response.status().is_success() {
            panic!("login failed in test helper: status {}", response.status());
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["token"].as_str().expect("no token in login body").to_string()
    }

    /// Creates a room through the admin API and returns the response body.
    pub async fn create_room(&self, token: &str, name: &str, price: &str) -> Value {
        let payload = json!({
            "name": name,
            "description": "A spacious room with a generous view of the city.",
            "price": price,
            "sizeSqm": 55,
            "occupancy": 2,
            "images": ["https://images.example.com/room.jpg"],
            "highlights": ["Smart Controls", "Wellness Lighting"]
        });

        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/admin/rooms")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        if response.status() != axum::http::StatusCode::CREATED {
            panic!("create_room failed in test helper: status {}", response.status());
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
