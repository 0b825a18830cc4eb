use crate::domain::models::booking::{Booking, BookingFilter, BookingStatus, NewBooking, PaymentStatus};
use crate::domain::models::room::Room;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Room columns are aliased with an r_ prefix so they survive next to the
// booking's own id/created_at/updated_at in one joined row.
const SELECT_WITH_ROOM: &str = r#"
SELECT b.id, b.room_id, b.customer_name, b.customer_email, b.customer_phone,
       b.check_in, b.check_out, b.guests, b.total_price, b.status,
       b.payment_status, b.notes, b.created_at, b.updated_at,
       r.id AS r_id, r.slug AS r_slug, r.name AS r_name,
       r.description AS r_description, r.price AS r_price,
       r.size_sqm AS r_size_sqm, r.occupancy AS r_occupancy,
       r.images AS r_images, r.highlights AS r_highlights,
       r.created_at AS r_created_at, r.updated_at AS r_updated_at
FROM bookings b
JOIN rooms r ON r.id = b.room_id"#;

fn map_booking_with_room(row: &PgRow) -> Result<(Booking, Room), sqlx::Error> {
    let booking = Booking {
        id: row.try_get("id")?,
        room_id: row.try_get("room_id")?,
        customer_name: row.try_get("customer_name")?,
        customer_email: row.try_get("customer_email")?,
        customer_phone: row.try_get("customer_phone")?,
        check_in: row.try_get("check_in")?,
        check_out: row.try_get("check_out")?,
        guests: row.try_get("guests")?,
        total_price: row.try_get("total_price")?,
        status: row.try_get("status")?,
        payment_status: row.try_get("payment_status")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    };
    let room = Room {
        id: row.try_get("r_id")?,
        slug: row.try_get("r_slug")?,
        name: row.try_get("r_name")?,
        description: row.try_get("r_description")?,
        price: row.try_get("r_price")?,
        size_sqm: row.try_get("r_size_sqm")?,
        occupancy: row.try_get("r_occupancy")?,
        images: row.try_get("r_images")?,
        highlights: row.try_get("r_highlights")?,
        created_at: row.try_get("r_created_at")?,
        updated_at: row.try_get("r_updated_at")?,
    };
    Ok((booking, room))
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Booking>(
            r#"INSERT INTO bookings (room_id, customer_name, customer_email, customer_phone,
                                     check_in, check_out, guests, total_price, status,
                                     payment_status, notes, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
               RETURNING *"#,
        )
        .bind(booking.room_id)
        .bind(&booking.customer_name)
        .bind(&booking.customer_email)
        .bind(&booking.customer_phone)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.total_price)
        .bind(BookingStatus::Pending.as_str())
        .bind(PaymentStatus::Unpaid.as_str())
        .bind(&booking.notes)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<(Booking, Room)>, AppError> {
        let query = format!("{SELECT_WITH_ROOM} WHERE b.id = $1");
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.map(|r| map_booking_with_room(&r))
            .transpose()
            .map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter) -> Result<Vec<(Booking, Room)>, AppError> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_WITH_ROOM);
        qb.push(" WHERE 1 = 1");

        if let Some(status) = &filter.status {
            qb.push(" AND b.status = ").push_bind(status);
        }
        if let Some(payment_status) = &filter.payment_status {
            qb.push(" AND b.payment_status = ").push_bind(payment_status);
        }
        if let Some(room_id) = filter.room_id {
            qb.push(" AND b.room_id = ").push_bind(room_id);
        }
        if let Some(email) = &filter.email {
            qb.push(" AND b.customer_email = ").push_bind(email);
        }

        qb.push(" ORDER BY b.created_at DESC");

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        rows.iter()
            .map(map_booking_with_room)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::Database)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            r#"UPDATE bookings
               SET status = $1, payment_status = $2, notes = $3, updated_at = $4
               WHERE id = $5
               RETURNING *"#,
        )
        .bind(&booking.status)
        .bind(&booking.payment_status)
        .bind(&booking.notes)
        .bind(Utc::now())
        .bind(booking.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }
}
