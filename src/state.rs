use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    AmenityRepository, BookingRepository, DiningRepository, EventRepository, GalleryRepository,
    RoomRepository, TestimonialRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub room_repo: Arc<dyn RoomRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub amenity_repo: Arc<dyn AmenityRepository>,
    pub dining_repo: Arc<dyn DiningRepository>,
    pub gallery_repo: Arc<dyn GalleryRepository>,
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthService>,
}
