use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    postgres_amenity_repo::PostgresAmenityRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_dining_repo::PostgresDiningRepo, postgres_event_repo::PostgresEventRepo,
    postgres_gallery_repo::PostgresGalleryRepo, postgres_room_repo::PostgresRoomRepo,
    postgres_testimonial_repo::PostgresTestimonialRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_amenity_repo::SqliteAmenityRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_dining_repo::SqliteDiningRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_gallery_repo::SqliteGalleryRepo, sqlite_room_repo::SqliteRoomRepo,
    sqlite_testimonial_repo::SqliteTestimonialRepo, sqlite_user_repo::SqliteUserRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let auth_service = Arc::new(AuthService::new(config));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            room_repo: Arc::new(PostgresRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            amenity_repo: Arc::new(PostgresAmenityRepo::new(pool.clone())),
            dining_repo: Arc::new(PostgresDiningRepo::new(pool.clone())),
            gallery_repo: Arc::new(PostgresGalleryRepo::new(pool.clone())),
            testimonial_repo: Arc::new(PostgresTestimonialRepo::new(pool.clone())),
            event_repo: Arc::new(PostgresEventRepo::new(pool.clone())),
            user_repo: Arc::new(PostgresUserRepo::new(pool)),
            auth_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            room_repo: Arc::new(SqliteRoomRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            amenity_repo: Arc::new(SqliteAmenityRepo::new(pool.clone())),
            dining_repo: Arc::new(SqliteDiningRepo::new(pool.clone())),
            gallery_repo: Arc::new(SqliteGalleryRepo::new(pool.clone())),
            testimonial_repo: Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            user_repo: Arc::new(SqliteUserRepo::new(pool)),
            auth_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
