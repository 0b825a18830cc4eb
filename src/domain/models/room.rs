use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

/// A bookable inventory unit with a nightly price. The slug is derived from
/// the name server-side and is unique across the catalog.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub size_sqm: i32,
    pub occupancy: i32,
    pub images: Json<Vec<String>>,
    pub highlights: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewRoom {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub size_sqm: i32,
    pub occupancy: i32,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
}
