use crate::domain::models::gallery::{GalleryItem, NewGalleryItem};
use crate::domain::ports::GalleryRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteGalleryRepo {
    pool: SqlitePool,
}

impl SqliteGalleryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryRepository for SqliteGalleryRepo {
    async fn create(&self, item: &NewGalleryItem) -> Result<GalleryItem, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, GalleryItem>(
            r#"INSERT INTO gallery_items (title, category, image_url, caption, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(&item.title)
        .bind(&item.category)
        .bind(&item.image_url)
        .bind(&item.caption)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<GalleryItem>, AppError> {
        sqlx::query_as::<_, GalleryItem>("SELECT * FROM gallery_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(
        &self,
        category: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<GalleryItem>, AppError> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT * FROM gallery_items WHERE 1 = 1");
        if let Some(category) = category {
            qb.push(" AND category = ").push_bind(category);
        }
        qb.push(" ORDER BY created_at DESC");
        if let Some(limit) = limit {
            qb.push(" LIMIT ").push_bind(limit);
        }

        qb.build_query_as::<GalleryItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, item: &GalleryItem) -> Result<GalleryItem, AppError> {
        sqlx::query_as::<_, GalleryItem>(
            r#"UPDATE gallery_items
               SET title = ?, category = ?, image_url = ?, caption = ?, updated_at = ?
               WHERE id = ?
               RETURNING *"#,
        )
        .bind(&item.title)
        .bind(&item.category)
        .bind(&item.image_url)
        .bind(&item.caption)
        .bind(Utc::now())
        .bind(item.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM gallery_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Gallery item not found".into()));
        }
        Ok(())
    }
}
