pub mod postgres_amenity_repo;
pub mod postgres_booking_repo;
pub mod postgres_dining_repo;
pub mod postgres_event_repo;
pub mod postgres_gallery_repo;
pub mod postgres_room_repo;
pub mod postgres_testimonial_repo;
pub mod postgres_user_repo;
pub mod sqlite_amenity_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_dining_repo;
pub mod sqlite_event_repo;
pub mod sqlite_gallery_repo;
pub mod sqlite_room_repo;
pub mod sqlite_testimonial_repo;
pub mod sqlite_user_repo;
