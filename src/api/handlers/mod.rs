pub mod amenity;
pub mod auth;
pub mod booking;
pub mod dining;
pub mod event;
pub mod gallery;
pub mod health;
pub mod room;
pub mod testimonial;
