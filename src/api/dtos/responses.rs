use serde::Serialize;

use crate::domain::models::{booking::Booking, room::Room, user::User};

/// Booking payload with the room snapshot the price was derived from.
#[derive(Serialize)]
pub struct BookingWithRoom {
    #[serde(flatten)]
    pub booking: Booking,
    pub room: Room,
}

impl BookingWithRoom {
    pub fn new(booking: Booking, room: Room) -> Self {
        Self { booking, room }
    }
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
