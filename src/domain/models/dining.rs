use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiningVenue {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    pub floor: Option<i32>,
    pub hours: String,
    pub description: String,
    pub menu_url: Option<String>,
    pub images: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewDiningVenue {
    pub name: String,
    pub venue_type: String,
    pub floor: Option<i32>,
    pub hours: String,
    pub description: String,
    pub menu_url: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiningType {
    FineDining,
    Casual,
    Cafe,
    Bar,
}

impl DiningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiningType::FineDining => "FINE_DINING",
            DiningType::Casual => "CASUAL",
            DiningType::Cafe => "CAFE",
            DiningType::Bar => "BAR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FINE_DINING" => Some(DiningType::FineDining),
            "CASUAL" => Some(DiningType::Casual),
            "CAFE" => Some(DiningType::Cafe),
            "BAR" => Some(DiningType::Bar),
            _ => None,
        }
    }
}
