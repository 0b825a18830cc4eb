use crate::domain::models::amenity::{Amenity, NewAmenity};
use crate::domain::ports::AmenityRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;

pub struct SqliteAmenityRepo {
    pool: SqlitePool,
}

impl SqliteAmenityRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmenityRepository for SqliteAmenityRepo {
    async fn create(&self, amenity: &NewAmenity) -> Result<Amenity, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Amenity>(
            r#"INSERT INTO amenities (name, description, category, hours, images, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&amenity.name)
        .bind(&amenity.description)
        .bind(&amenity.category)
        .bind(&amenity.hours)
        .bind(Json(&amenity.images))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_name(&self, category: Option<&str>) -> Result<Vec<Amenity>, AppError> {
        match category {
            Some(category) => {
                sqlx::query_as::<_, Amenity>(
                    "SELECT * FROM amenities WHERE category = ? ORDER BY name ASC",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)
    }

    async fn list_newest(&self) -> Result<Vec<Amenity>, AppError> {
        sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, amenity: &Amenity) -> Result<Amenity, AppError> {
        sqlx::query_as::<_, Amenity>(
            r#"UPDATE amenities
               SET name = ?, description = ?, category = ?, hours = ?, images = ?, updated_at = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&amenity.name)
        .bind(&amenity.description)
        .bind(&amenity.category)
        .bind(&amenity.hours)
        .bind(&amenity.images)
        .bind(Utc::now())
        .bind(amenity.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM amenities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Amenity not found".into()));
        }
        Ok(())
    }
}
