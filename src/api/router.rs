use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, cors::CorsLayer, trace::TraceLayer};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

use crate::api::handlers::{
    amenity, auth, booking, dining, event, gallery, health, room, testimonial,
};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))

        // Public site
        .route("/api/v1/rooms", get(room::list_rooms))
        .route("/api/v1/rooms/{slug}", get(room::get_room_by_slug))
        .route("/api/v1/amenities", get(amenity::list_amenities))
        .route("/api/v1/dining", get(dining::list_dining))
        .route("/api/v1/gallery", get(gallery::list_gallery))
        .route("/api/v1/testimonials", get(testimonial::list_testimonials))
        .route("/api/v1/bookings", post(booking::create_booking))

        // Admin auth
        .route("/api/v1/admin/auth/login", post(auth::login))
        .route("/api/v1/admin/auth/register", post(auth::register))
        .route("/api/v1/admin/auth/seed-admin", post(auth::seed_admin))

        // Admin catalog
        .route(
            "/api/v1/admin/rooms",
            get(room::admin_list_rooms).post(room::create_room),
        )
        .route(
            "/api/v1/admin/rooms/{id}",
            get(room::admin_get_room)
                .patch(room::update_room)
                .delete(room::delete_room),
        )
        .route(
            "/api/v1/admin/amenities",
            get(amenity::admin_list_amenities).post(amenity::create_amenity),
        )
        .route(
            "/api/v1/admin/amenities/{id}",
            get(amenity::admin_get_amenity)
                .patch(amenity::update_amenity)
                .delete(amenity::delete_amenity),
        )
        .route(
            "/api/v1/admin/dining",
            get(dining::admin_list_dining).post(dining::create_dining),
        )
        .route(
            "/api/v1/admin/dining/{id}",
            get(dining::admin_get_dining)
                .patch(dining::update_dining)
                .delete(dining::delete_dining),
        )
        .route(
            "/api/v1/admin/gallery",
            get(gallery::admin_list_gallery).post(gallery::create_gallery_item),
        )
        .route(
            "/api/v1/admin/gallery/{id}",
            axum::routing::patch(gallery::update_gallery_item).delete(gallery::delete_gallery_item),
        )
        .route(
            "/api/v1/admin/testimonials",
            get(testimonial::admin_list_testimonials).post(testimonial::create_testimonial),
        )
        .route(
            "/api/v1/admin/testimonials/{id}",
            axum::routing::patch(testimonial::update_testimonial)
                .delete(testimonial::delete_testimonial),
        )
        .route(
            "/api/v1/admin/events",
            get(event::admin_list_events).post(event::create_event),
        )
        .route(
            "/api/v1/admin/events/{id}",
            axum::routing::patch(event::update_event).delete(event::delete_event),
        )

        // Admin bookings
        .route("/api/v1/admin/bookings", get(booking::list_bookings))
        .route(
            "/api/v1/admin/bookings/{id}",
            get(booking::get_booking)
                .patch(booking::update_booking)
                .delete(booking::delete_booking),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        "started processing request: {} {}",
                        request.method(),
                        request.uri().path()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                )
                .on_failure(
                    |failure: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("request failed: {:?}", failure);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
