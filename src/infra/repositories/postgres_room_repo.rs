use crate::domain::models::room::{NewRoom, Room};
use crate::domain::ports::RoomRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

pub struct PostgresRoomRepo {
    pool: PgPool,
}

impl PostgresRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepo {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Room>(
            r#"INSERT INTO rooms (slug, name, description, price, size_sqm, occupancy, images, highlights, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               RETURNING *"#,
        )
        .bind(&room.slug)
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.price)
        .bind(room.size_sqm)
        .bind(room.occupancy)
        .bind(Json(&room.images))
        .bind(Json(&room.highlights))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let count: i64 = match exclude_id {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE slug = $1 AND id <> $2")
                    .bind(slug)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE slug = $1")
                    .bind(slug)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn list_by_price(&self) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY price ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_newest(&self) -> Result<Vec<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, room: &Room) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            r#"UPDATE rooms
               SET slug = $1, name = $2, description = $3, price = $4,
                   size_sqm = $5, occupancy = $6, images = $7, highlights = $8,
                   updated_at = $9
               WHERE id = $10
               RETURNING *"#,
        )
        .bind(&room.slug)
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.price)
        .bind(room.size_sqm)
        .bind(room.occupancy)
        .bind(&room.images)
        .bind(&room.highlights)
        .bind(Utc::now())
        .bind(room.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".into()));
        }
        Ok(())
    }
}
