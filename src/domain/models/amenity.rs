use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub hours: Option<String>,
    pub images: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewAmenity {
    pub name: String,
    pub description: String,
    pub category: String,
    pub hours: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmenityCategory {
    Leisure,
    Wellness,
    Fitness,
    Business,
}

impl AmenityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmenityCategory::Leisure => "LEISURE",
            AmenityCategory::Wellness => "WELLNESS",
            AmenityCategory::Fitness => "FITNESS",
            AmenityCategory::Business => "BUSINESS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LEISURE" => Some(AmenityCategory::Leisure),
            "WELLNESS" => Some(AmenityCategory::Wellness),
            "FITNESS" => Some(AmenityCategory::Fitness),
            "BUSINESS" => Some(AmenityCategory::Business),
            _ => None,
        }
    }
}
