use crate::domain::models::room::{NewRoom, Room};
use crate::domain::ports::RoomRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use sqlx::types::Json;
use std::str::FromStr;

// SQLite has no decimal column type, so prices live in TEXT and go through
// rust_decimal on the way in and out. ORDER BY casts to REAL because a
// lexical sort would put "1000.00" before "249.00".
pub struct SqliteRoomRepo {
    pool: SqlitePool,
}

impl SqliteRoomRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub(crate) fn parse_price(text: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(text).map_err(|_| AppError::Internal)
}

fn map_room(row: &SqliteRow) -> Result<Room, AppError> {
    let price: String = row.try_get("price")?;
    Ok(Room {
        id: row.try_get("id")?,
        slug: row.try_get("slug")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: parse_price(&price)?,
        size_sqm: row.try_get("size_sqm")?,
        occupancy: row.try_get("occupancy")?,
        images: row.try_get("images")?,
        highlights: row.try_get("highlights")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl RoomRepository for SqliteRoomRepo {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"INSERT INTO rooms (slug, name, description, price, size_sqm, occupancy, images, highlights, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&room.slug)
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.price.to_string())
        .bind(room.size_sqm)
        .bind(room.occupancy)
        .bind(Json(&room.images))
        .bind(Json(&room.highlights))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        map_room(&row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_room).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Room>, AppError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_room).transpose()
    }

    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError> {
        let count: i64 = match exclude_id {
            Some(id) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE slug = ? AND id <> ?")
                    .bind(slug)
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE slug = ?")
                    .bind(slug)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(count > 0)
    }

    async fn list_by_price(&self) -> Result<Vec<Room>, AppError> {
        let rows = sqlx::query("SELECT * FROM rooms ORDER BY CAST(price AS REAL) ASC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_room).collect()
    }

    async fn list_newest(&self) -> Result<Vec<Room>, AppError> {
        let rows = sqlx::query("SELECT * FROM rooms ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_room).collect()
    }

    async fn update(&self, room: &Room) -> Result<Room, AppError> {
        let row = sqlx::query(
            r#"UPDATE rooms
               SET slug = ?, name = ?, description = ?, price = ?,
                   size_sqm = ?, occupancy = ?, images = ?, highlights = ?,
                   updated_at = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&room.slug)
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.price.to_string())
        .bind(room.size_sqm)
        .bind(room.occupancy)
        .bind(&room.images)
        .bind(&room.highlights)
        .bind(Utc::now())
        .bind(room.id)
        .fetch_one(&self.pool)
        .await?;
        map_room(&row)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".into()));
        }
        Ok(())
    }
}
