use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewGalleryItem {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Exterior,
    Room,
    Amenity,
    Dining,
    Event,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Exterior => "EXTERIOR",
            GalleryCategory::Room => "ROOM",
            GalleryCategory::Amenity => "AMENITY",
            GalleryCategory::Dining => "DINING",
            GalleryCategory::Event => "EVENT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "EXTERIOR" => Some(GalleryCategory::Exterior),
            "ROOM" => Some(GalleryCategory::Room),
            "AMENITY" => Some(GalleryCategory::Amenity),
            "DINING" => Some(GalleryCategory::Dining),
            "EVENT" => Some(GalleryCategory::Event),
            _ => None,
        }
    }
}
