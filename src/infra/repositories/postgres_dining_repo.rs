use crate::domain::models::dining::{DiningVenue, NewDiningVenue};
use crate::domain::ports::DiningRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::types::Json;

pub struct PostgresDiningRepo {
    pool: PgPool,
}

impl PostgresDiningRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiningRepository for PostgresDiningRepo {
    async fn create(&self, venue: &NewDiningVenue) -> Result<DiningVenue, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, DiningVenue>(
            r#"INSERT INTO dining_venues (name, venue_type, floor, hours, description, menu_url, images, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
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
        sqlx::query_as::<_, DiningVenue>("SELECT * FROM dining_venues WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_name(&self, venue_type: Option<&str>) -> Result<Vec<DiningVenue>, AppError> {
        match venue_type {
            Some(venue_type) => {
                sqlx::query_as::<_, DiningVenue>(
                    "SELECT * FROM dining_venues WHERE venue_type = $1 ORDER BY name ASC",
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
               SET name = $1, venue_type = $2, floor = $3, hours = $4,
                   description = $5, menu_url = $6, images = $7, updated_at = $8
               WHERE id = $9
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
        let result = sqlx::query("DELETE FROM dining_venues WHERE id = $1")
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
