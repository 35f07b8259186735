//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves the interactive documentation at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{
    router::{OpenApiRouter, UtoipaMethodRouterExt},
    routes,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, admin},
    model::app::AppState,
    service::media::validation::MAX_UPLOAD_BYTES,
};

/// Multipart overhead allowed on top of the largest accepted image
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let state = startup::build_app_state(&config, db)?;
/// let router = routes().with_state(state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Kashi Darshan", description = "Jyotirlinga darshan booking API"),
        modifiers(&BearerAuth),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Phone OTP authentication"),
            (name = controller::content::CONTENT_TAG, description = "Temples, darshan types and slots"),
            (name = controller::booking::BOOKING_TAG, description = "Darshan bookings"),
            (name = admin::ADMIN_TAG, description = "Back office"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(controller::auth::send_otp))
        .routes(routes!(controller::auth::verify_otp))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::logout))
        // Content
        .routes(routes!(controller::content::list_cities))
        .routes(routes!(controller::content::get_city))
        .routes(routes!(controller::content::list_jyotirlingas))
        .routes(routes!(controller::content::get_jyotirlinga))
        .routes(routes!(controller::content::list_darshan_types))
        .routes(routes!(controller::content::get_slot_availability))
        .routes(routes!(controller::content::random_quote))
        // Bookings
        .routes(routes!(
            controller::booking::create_booking,
            controller::booking::list_bookings
        ))
        .routes(routes!(controller::booking::get_booking))
        .routes(routes!(controller::booking::cancel_booking))
        .routes(routes!(controller::booking::confirm_payment))
        .routes(routes!(controller::booking::download_receipt))
        // Admin
        .routes(routes!(admin::auth::login))
        .routes(routes!(admin::content::create_city))
        .routes(routes!(
            admin::content::update_city,
            admin::content::delete_city
        ))
        .routes(routes!(admin::content::create_jyotirlinga))
        .routes(routes!(
            admin::content::update_jyotirlinga,
            admin::content::delete_jyotirlinga
        ))
        .routes(routes!(admin::content::create_darshan_type))
        .routes(routes!(
            admin::content::update_darshan_type,
            admin::content::delete_darshan_type
        ))
        .routes(routes!(admin::content::create_time_slot))
        .routes(routes!(
            admin::content::update_time_slot,
            admin::content::delete_time_slot
        ))
        .routes(routes!(admin::content::create_quote))
        .routes(routes!(
            admin::content::update_quote,
            admin::content::delete_quote
        ))
        .routes(routes!(admin::booking::list_bookings))
        .routes(routes!(admin::booking::update_booking_status))
        .routes(
            routes!(admin::media::upload_media, admin::media::delete_media)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
}
