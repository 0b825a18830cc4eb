pub mod amenity;
pub mod booking;
pub mod dining;
pub mod event;
pub mod gallery;
pub mod room;
pub mod testimonial;
pub mod user;
