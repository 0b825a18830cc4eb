use crate::domain::models::{
    amenity::{Amenity, NewAmenity},
    booking::{Booking, BookingFilter, NewBooking},
    dining::{DiningVenue, NewDiningVenue},
    event::{Event, NewEvent},
    gallery::{GalleryItem, NewGalleryItem},
    room::{NewRoom, Room},
    testimonial::{NewTestimonial, Testimonial},
    user::{NewUser, User},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Room>, AppError>;
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, AppError>;
    async fn list_by_price(&self) -> Result<Vec<Room>, AppError>;
    async fn list_newest(&self) -> Result<Vec<Room>, AppError>;
    async fn update(&self, room: &Room) -> Result<Room, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<(Booking, Room)>, AppError>;
    async fn list(&self, filter: &BookingFilter) -> Result<Vec<(Booking, Room)>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, amenity: &NewAmenity) -> Result<Amenity, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError>;
    async fn list_by_name(&self, category: Option<&str>) -> Result<Vec<Amenity>, AppError>;
    async fn list_newest(&self) -> Result<Vec<Amenity>, AppError>;
    async fn update(&self, amenity: &Amenity) -> Result<Amenity, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait DiningRepository: Send + Sync {
    async fn create(&self, venue: &NewDiningVenue) -> Result<DiningVenue, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<DiningVenue>, AppError>;
    async fn list_by_name(&self, venue_type: Option<&str>) -> Result<Vec<DiningVenue>, AppError>;
    async fn list_newest(&self) -> Result<Vec<DiningVenue>, AppError>;
    async fn update(&self, venue: &DiningVenue) -> Result<DiningVenue, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn create(&self, item: &NewGalleryItem) -> Result<GalleryItem, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<GalleryItem>, AppError>;
    async fn list(
        &self,
        category: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<GalleryItem>, AppError>;
    async fn update(&self, item: &GalleryItem) -> Result<GalleryItem, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: &NewTestimonial) -> Result<Testimonial, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Testimonial>, AppError>;
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, AppError>;
    async fn update(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &NewEvent) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list_by_date(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn count_admins(&self) -> Result<i64, AppError>;
}
