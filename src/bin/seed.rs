use lumina_hotel_api::config::Config;
use lumina_hotel_api::domain::models::amenity::NewAmenity;
use lumina_hotel_api::domain::models::dining::NewDiningVenue;
use lumina_hotel_api::domain::models::gallery::NewGalleryItem;
use lumina_hotel_api::domain::models::room::NewRoom;
use lumina_hotel_api::domain::models::testimonial::NewTestimonial;
use lumina_hotel_api::domain::models::user::{NewUser, UserRole};
use lumina_hotel_api::infra::factory::bootstrap_state;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::info;

/// Populates an empty database with the demo catalog and a default admin
/// account (admin@lumina.com / Admin@123). Safe to re-run: sections that
/// already contain rows are left alone.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    info!("Seeding database...");

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;

    if state
        .user_repo
        .find_by_email("admin@lumina.com")
        .await
        .expect("user lookup failed")
        .is_none()
    {
        let password_hash = state
            .auth_service
            .hash_password("Admin@123")
            .expect("password hashing failed");
        state
            .user_repo
            .create(&NewUser {
                email: "admin@lumina.com".into(),
                password_hash,
                role: UserRole::Admin.as_str().to_string(),
            })
            .await
            .expect("admin creation failed");
        info!("Seeded admin user admin@lumina.com");
    }

    seed_rooms(&state).await;
    seed_amenities(&state).await;
    seed_dining(&state).await;
    seed_gallery(&state).await;
    seed_testimonials(&state).await;

    info!("Seed completed");
}

fn price(text: &str) -> Decimal {
    Decimal::from_str(text).expect("bad price literal")
}

async fn seed_rooms(state: &lumina_hotel_api::state::AppState) {
    if !state.room_repo.list_newest().await.expect("room list failed").is_empty() {
        return;
    }

    let rooms = [
        NewRoom {
            slug: "quantum-suite".into(),
            name: "Quantum Suite".into(),
            description: "Experience luxury in our flagship suite featuring floor-to-ceiling smart glass, holographic concierge, and panoramic skyline views.".into(),
            price: price("599.00"),
            size_sqm: 120,
            occupancy: 4,
            images: vec![
                "https://images.unsplash.com/photo-1611892440504-42a792e24d32?w=800".into(),
                "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=800".into(),
            ],
            highlights: vec![
                "Holographic Concierge".into(),
                "Smart Glass Walls".into(),
                "Infinity Skydeck".into(),
            ],
        },
        NewRoom {
            slug: "cyber-deluxe".into(),
            name: "Cyber Deluxe".into(),
            description: "Modern comfort infused with adaptive lighting, immersive entertainment pods, and skyline lounge access.".into(),
            price: price("399.00"),
            size_sqm: 80,
            occupancy: 3,
            images: vec![
                "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800".into(),
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800".into(),
            ],
            highlights: vec![
                "Adaptive Lighting".into(),
                "Immersive Entertainment Pod".into(),
                "Lounge Access".into(),
            ],
        },
        NewRoom {
            slug: "neo-standard".into(),
            name: "Neo Standard".into(),
            description: "Sleek and functional room outfitted with smart controls, ultra-fast connectivity, and wellness-focused amenities.".into(),
            price: price("249.00"),
            size_sqm: 55,
            occupancy: 2,
            images: vec![
                "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=800".into(),
                "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=800".into(),
            ],
            highlights: vec![
                "Smart Controls".into(),
                "All-day Room Service".into(),
                "Wellness Lighting".into(),
            ],
        },
    ];

    for room in &rooms {
        state.room_repo.create(room).await.expect("room seed failed");
    }
    info!("Seeded rooms: {}", rooms.len());
}

async fn seed_amenities(state: &lumina_hotel_api::state::AppState) {
    if !state.amenity_repo.list_newest().await.expect("amenity list failed").is_empty() {
        return;
    }

    let amenities = [
        NewAmenity {
            name: "Skyline Infinity Pool".into(),
            description: "Heated rooftop pool with skyline vistas and ambient lighting.".into(),
            category: "LEISURE".into(),
            hours: Some("06:00 - 23:00".into()),
            images: vec!["https://images.unsplash.com/photo-1567552379232-c32f3d64d251?w=800".into()],
        },
        NewAmenity {
            name: "Lumina Wellness Spa".into(),
            description: "Holistic treatments, meditation pods, and sensory saunas.".into(),
            category: "WELLNESS".into(),
            hours: Some("09:00 - 21:00".into()),
            images: vec!["https://images.unsplash.com/photo-1544161515-4ab6ce6db874?w=800".into()],
        },
        NewAmenity {
            name: "Quantum Fitness Lab".into(),
            description: "AI-personalized workouts, VR cycling, and strength zones.".into(),
            category: "FITNESS".into(),
            hours: Some("24 Hours".into()),
            images: vec!["https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800".into()],
        },
    ];

    for amenity in &amenities {
        state.amenity_repo.create(amenity).await.expect("amenity seed failed");
    }
    info!("Seeded amenities: {}", amenities.len());
}

async fn seed_dining(state: &lumina_hotel_api::state::AppState) {
    if !state.dining_repo.list_newest().await.expect("dining list failed").is_empty() {
        return;
    }

    let venues = [
        NewDiningVenue {
            name: "Quantum Kitchen".into(),
            venue_type: "FINE_DINING".into(),
            floor: Some(45),
            hours: "17:00 - 23:00".into(),
            description: "Progressive gastronomy with molecular techniques and skyline dining.".into(),
            menu_url: Some("https://example.com/menus/quantum-kitchen.pdf".into()),
            images: vec!["https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800".into()],
        },
        NewDiningVenue {
            name: "Cyber Café".into(),
            venue_type: "CAFE".into(),
            floor: Some(1),
            hours: "07:00 - 22:00".into(),
            description: "Artisanal coffee, smart charging stations, and productive lounges.".into(),
            menu_url: Some("https://example.com/menus/cyber-cafe.pdf".into()),
            images: vec!["https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=800".into()],
        },
        NewDiningVenue {
            name: "Neo Sushi Bar".into(),
            venue_type: "CASUAL".into(),
            floor: Some(38),
            hours: "12:00 - 23:00".into(),
            description: "Contemporary sushi theater with chef-led tastings and sake pairings.".into(),
            menu_url: Some("https://example.com/menus/neo-sushi.pdf".into()),
            images: vec!["https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?w=800".into()],
        },
    ];

    for venue in &venues {
        state.dining_repo.create(venue).await.expect("dining seed failed");
    }
    info!("Seeded dining venues: {}", venues.len());
}

async fn seed_gallery(state: &lumina_hotel_api::state::AppState) {
    if !state.gallery_repo.list(None, None).await.expect("gallery list failed").is_empty() {
        return;
    }

    let items = [
        NewGalleryItem {
            title: "Lumina Exterior at Night".into(),
            category: "EXTERIOR".into(),
            image_url: "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1200".into(),
            caption: Some("The Lumina skyline glowing against the city nightscape.".into()),
        },
        NewGalleryItem {
            title: "Quantum Suite Living Room".into(),
            category: "ROOM".into(),
            image_url: "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=1200".into(),
            caption: Some("Lounge in holographic-lit comfort with panoramic views.".into()),
        },
        NewGalleryItem {
            title: "Skyline Infinity Pool".into(),
            category: "AMENITY".into(),
            image_url: "https://images.unsplash.com/photo-1567552379232-c32f3d64d251?w=1200".into(),
            caption: Some("Sunset reflections over the city from our rooftop pool.".into()),
        },
    ];

    for item in &items {
        state.gallery_repo.create(item).await.expect("gallery seed failed");
    }
    info!("Seeded gallery items: {}", items.len());
}

async fn seed_testimonials(state: &lumina_hotel_api::state::AppState) {
    if !state.testimonial_repo.list(None).await.expect("testimonial list failed").is_empty() {
        return;
    }

    let testimonials = [
        NewTestimonial {
            guest_name: "Ava Clarkson".into(),
            content: "The Lumina experience is beyond imagination. The AI concierge remembered every preference!".into(),
            rating: 5,
        },
        NewTestimonial {
            guest_name: "Jasper Lin".into(),
            content: "Loved the Quantum Suite. The holographic art installations are out of this world.".into(),
            rating: 5,
        },
    ];

    for testimonial in &testimonials {
        state
            .testimonial_repo
            .create(testimonial)
            .await
            .expect("testimonial seed failed");
    }
    info!("Seeded testimonials: {}", testimonials.len());
}
