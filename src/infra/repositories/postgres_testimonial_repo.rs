use crate::domain::models::testimonial::{NewTestimonial, Testimonial};
use crate::domain::ports::TestimonialRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresTestimonialRepo {
    pool: PgPool,
}

impl PostgresTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PostgresTestimonialRepo {
    async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Testimonial>(
            r#"INSERT INTO testimonials (guest_name, content, rating, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(&testimonial.guest_name)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, AppError> {
        match limit {
            Some(limit) => {
                sqlx::query_as::<_, Testimonial>(
                    "SELECT * FROM testimonials ORDER BY created_at DESC LIMIT $1",
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Testimonial>(
                    "SELECT * FROM testimonials ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(AppError::Database)
    }

    async fn update(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            r#"UPDATE testimonials
               SET guest_name = $1, content = $2, rating = $3, updated_at = $4
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(&testimonial.guest_name)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(Utc::now())
        .bind(testimonial.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Testimonial not found".into()));
        }
        Ok(())
    }
}
