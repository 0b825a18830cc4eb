use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::models::amenity::AmenityCategory;
use crate::domain::models::dining::DiningType;
use crate::domain::models::gallery::GalleryCategory;
use crate::error::AppError;

pub const MAX_NOTES_LEN: usize = 500;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub room_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    // Kept as strings so an unparsable timestamp surfaces as a 400 with the
    // date-specific message instead of a generic body rejection.
    pub check_in: String,
    pub check_out: String,
    pub guests: i32,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingQuery {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub room_id: Option<i64>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub size_sqm: i32,
    pub occupancy: i32,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().len() < 3 {
            return Err(AppError::Validation("name must be at least 3 characters".into()));
        }
        if self.description.trim().len() < 10 {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if self.price <= Decimal::ZERO {
            return Err(AppError::Validation("price must be positive".into()));
        }
        if self.size_sqm < 1 {
            return Err(AppError::Validation("sizeSqm must be positive".into()));
        }
        if self.occupancy < 1 {
            return Err(AppError::Validation("occupancy must be positive".into()));
        }
        validate_image_list(&self.images, 1)?;
        if self.highlights.is_empty() || self.highlights.iter().any(|h| h.trim().len() < 2) {
            return Err(AppError::Validation(
                "at least one highlight of 2+ characters is required".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub size_sqm: Option<i32>,
    pub occupancy: Option<i32>,
    pub images: Option<Vec<String>>,
    pub highlights: Option<Vec<String>>,
}

impl UpdateRoomRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name
            && name.trim().len() < 3
        {
            return Err(AppError::Validation("name must be at least 3 characters".into()));
        }
        if let Some(desc) = &self.description
            && desc.trim().len() < 10
        {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if let Some(price) = self.price
            && price <= Decimal::ZERO
        {
            return Err(AppError::Validation("price must be positive".into()));
        }
        if let Some(size) = self.size_sqm
            && size < 1
        {
            return Err(AppError::Validation("sizeSqm must be positive".into()));
        }
        if let Some(occupancy) = self.occupancy
            && occupancy < 1
        {
            return Err(AppError::Validation("occupancy must be positive".into()));
        }
        if let Some(images) = &self.images {
            validate_image_list(images, 1)?;
        }
        if let Some(highlights) = &self.highlights
            && (highlights.is_empty() || highlights.iter().any(|h| h.trim().len() < 2))
        {
            return Err(AppError::Validation(
                "at least one highlight of 2+ characters is required".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct AmenityQuery {
    pub category: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAmenityRequest {
    pub name: String,
    pub description: String,
    pub category: String,
    pub hours: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateAmenityRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().len() < 2 {
            return Err(AppError::Validation("name must be at least 2 characters".into()));
        }
        if self.description.trim().len() < 5 {
            return Err(AppError::Validation(
                "description must be at least 5 characters".into(),
            ));
        }
        if AmenityCategory::parse(&self.category).is_none() {
            return Err(AppError::Validation("unknown amenity category".into()));
        }
        validate_image_list(&self.images, 0)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAmenityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub hours: Option<String>,
    pub images: Option<Vec<String>>,
}

impl UpdateAmenityRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name
            && name.trim().len() < 2
        {
            return Err(AppError::Validation("name must be at least 2 characters".into()));
        }
        if let Some(desc) = &self.description
            && desc.trim().len() < 5
        {
            return Err(AppError::Validation(
                "description must be at least 5 characters".into(),
            ));
        }
        if let Some(category) = &self.category
            && AmenityCategory::parse(category).is_none()
        {
            return Err(AppError::Validation("unknown amenity category".into()));
        }
        if let Some(images) = &self.images {
            validate_image_list(images, 0)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct DiningQuery {
    #[serde(rename = "type")]
    pub venue_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiningRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    pub floor: Option<i32>,
    pub hours: String,
    pub description: String,
    pub menu_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CreateDiningRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().len() < 2 {
            return Err(AppError::Validation("name must be at least 2 characters".into()));
        }
        if DiningType::parse(&self.venue_type).is_none() {
            return Err(AppError::Validation("unknown dining type".into()));
        }
        if self.hours.trim().len() < 3 {
            return Err(AppError::Validation("hours must be at least 3 characters".into()));
        }
        if self.description.trim().len() < 10 {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if let Some(url) = &self.menu_url
            && !is_valid_url(url)
        {
            return Err(AppError::Validation("menuUrl must be a valid URL".into()));
        }
        validate_image_list(&self.images, 0)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiningRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub venue_type: Option<String>,
    pub floor: Option<i32>,
    pub hours: Option<String>,
    pub description: Option<String>,
    pub menu_url: Option<String>,
    pub images: Option<Vec<String>>,
}

impl UpdateDiningRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name
            && name.trim().len() < 2
        {
            return Err(AppError::Validation("name must be at least 2 characters".into()));
        }
        if let Some(venue_type) = &self.venue_type
            && DiningType::parse(venue_type).is_none()
        {
            return Err(AppError::Validation("unknown dining type".into()));
        }
        if let Some(hours) = &self.hours
            && hours.trim().len() < 3
        {
            return Err(AppError::Validation("hours must be at least 3 characters".into()));
        }
        if let Some(desc) = &self.description
            && desc.trim().len() < 10
        {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if let Some(url) = &self.menu_url
            && !is_valid_url(url)
        {
            return Err(AppError::Validation("menuUrl must be a valid URL".into()));
        }
        if let Some(images) = &self.images {
            validate_image_list(images, 0)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItemRequest {
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub caption: Option<String>,
}

impl CreateGalleryItemRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().len() < 2 {
            return Err(AppError::Validation("title must be at least 2 characters".into()));
        }
        if GalleryCategory::parse(&self.category).is_none() {
            return Err(AppError::Validation("unknown gallery category".into()));
        }
        if !is_valid_url(&self.image_url) {
            return Err(AppError::Validation("imageUrl must be a valid URL".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGalleryItemRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub caption: Option<String>,
}

impl UpdateGalleryItemRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title
            && title.trim().len() < 2
        {
            return Err(AppError::Validation("title must be at least 2 characters".into()));
        }
        if let Some(category) = &self.category
            && GalleryCategory::parse(category).is_none()
        {
            return Err(AppError::Validation("unknown gallery category".into()));
        }
        if let Some(url) = &self.image_url
            && !is_valid_url(url)
        {
            return Err(AppError::Validation("imageUrl must be a valid URL".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub guest_name: String,
    pub content: String,
    pub rating: i32,
}

impl CreateTestimonialRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.guest_name.trim().len() < 2 {
            return Err(AppError::Validation(
                "guestName must be at least 2 characters".into(),
            ));
        }
        if self.content.trim().len() < 10 {
            return Err(AppError::Validation(
                "content must be at least 10 characters".into(),
            ));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::Validation("rating must be between 1 and 5".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub guest_name: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateTestimonialRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.guest_name
            && name.trim().len() < 2
        {
            return Err(AppError::Validation(
                "guestName must be at least 2 characters".into(),
            ));
        }
        if let Some(content) = &self.content
            && content.trim().len() < 10
        {
            return Err(AppError::Validation(
                "content must be at least 10 characters".into(),
            ));
        }
        if let Some(rating) = self.rating
            && !(1..=5).contains(&rating)
        {
            return Err(AppError::Validation("rating must be between 1 and 5".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    pub venue: String,
    pub image_url: Option<String>,
}

impl CreateEventRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().len() < 3 {
            return Err(AppError::Validation("title must be at least 3 characters".into()));
        }
        if self.description.trim().len() < 10 {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if self.venue.trim().len() < 2 {
            return Err(AppError::Validation("venue must be at least 2 characters".into()));
        }
        if let Some(url) = &self.image_url
            && !is_valid_url(url)
        {
            return Err(AppError::Validation("imageUrl must be a valid URL".into()));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub image_url: Option<String>,
}

impl UpdateEventRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title
            && title.trim().len() < 3
        {
            return Err(AppError::Validation("title must be at least 3 characters".into()));
        }
        if let Some(desc) = &self.description
            && desc.trim().len() < 10
        {
            return Err(AppError::Validation(
                "description must be at least 10 characters".into(),
            ));
        }
        if let Some(venue) = &self.venue
            && venue.trim().len() < 2
        {
            return Err(AppError::Validation("venue must be at least 2 characters".into()));
        }
        if let Some(url) = &self.image_url
            && !is_valid_url(url)
        {
            return Err(AppError::Validation("imageUrl must be a valid URL".into()));
        }
        Ok(())
    }
}

fn validate_image_list(images: &[String], min: usize) -> Result<(), AppError> {
    if images.len() < min {
        return Err(AppError::Validation("at least one image URL is required".into()));
    }
    if images.iter().any(|url| !is_valid_url(url)) {
        return Err(AppError::Validation("images must be valid URLs".into()));
    }
    Ok(())
}

pub fn is_valid_url(value: &str) -> bool {
    (value.starts_with("http://") && value.len() > 7)
        || (value.starts_with("https://") && value.len() > 8)
}

/// Minimal syntactic check: one `@`, non-empty local part, dot in the domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("a.b+tag@mail.co.uk"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@"));
        assert!(!is_valid_email("guest@nodot"));
        assert!(!is_valid_email("guest@.com"));
        assert!(!is_valid_email("gu est@example.com"));
    }

    #[test]
    fn url_syntax() {
        assert!(is_valid_url("https://images.example.com/room.jpg"));
        assert!(is_valid_url("http://x.y"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn testimonial_rating_bounds() {
        let mut req = CreateTestimonialRequest {
            guest_name: "Ava".into(),
            content: "Wonderful stay, would return.".into(),
            rating: 5,
        };
        assert!(req.validate().is_ok());
        req.rating = 0;
        assert!(req.validate().is_err());
        req.rating = 6;
        assert!(req.validate().is_err());
    }
}
