use crate::domain::models::dining::{DiningVenue, NewDiningVenue};
use crate::domain::ports::DiningRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;

pub struct SqliteDiningRepo {
    pool: SqlitePool,
}

impl SqliteDiningRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiningRepository for SqliteDiningRepo {
    async fn create(&self, venue: &NewDiningVenue) -> Result<DiningVenue, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, DiningVenue>(
            r#"INSERT INTO dining_venues (name, venue_type, floor, hours, description, menu_url, images, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&venue.name)
        .bind(&venue.venue_type)
        .bind(venue.floor)
        .bind(&venue.hours)
        .bind(&venue.description)
        .bind(&venue.menu_url)
        .bind(Json(&venue.images))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DiningVenue>, AppError> {
        sqlx::query_as::<_, DiningVenue>("SELECT * FROM dining_venues WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_name(&self, venue_type: Option<&str>) -> Result<Vec<DiningVenue>, AppError> {
        match venue_type {
            Some(venue_type) => {
                sqlx::query_as::<_, DiningVenue>(
                    "SELECT * FROM dining_venues WHERE venue_type = ? ORDER BY name ASC",
                )
                .bind(venue_type)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, DiningVenue>("SELECT * FROM dining_venues ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)
    }

    async fn list_newest(&self) -> Result<Vec<DiningVenue>, AppError> {
        sqlx::query_as::<_, DiningVenue>("SELECT * FROM dining_venues ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, venue: &DiningVenue) -> Result<DiningVenue, AppError> {
        sqlx::query_as::<_, DiningVenue>(
            r#"UPDATE dining_venues
               SET name = ?, venue_type = ?, floor = ?, hours = ?,
                   description = ?, menu_url = ?, images = ?, updated_at = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&venue.name)
        .bind(&venue.venue_type)
        .bind(venue.floor)
        .bind(&venue.hours)
        .bind(&venue.description)
        .bind(&venue.menu_url)
        .bind(&venue.images)
        .bind(Utc::now())
        .bind(venue.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM dining_venues WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Dining venue not found".into()));
        }
        Ok(())
    }
}
