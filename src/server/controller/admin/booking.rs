use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{BookingFilterDto, UpdateBookingStatusDto},
        api::ErrorDto,
        booking::BookingDto,
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{cache::private_no_cache, extractor::AdminAuth},
        },
        error::Error,
        model::app::AppState,
        service::booking::BookingService,
    },
};

/// Lists bookings filtered by visit date and status, newest first
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(BookingFilterDto),
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Query(filter): Query<BookingFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let bookings = BookingService::new(&state.db).admin_list(filter).await?;

    Ok((StatusCode::OK, private_no_cache(), Json(bookings)))
}

/// Moves a booking to another status
///
/// # Responses
/// - 200 (OK): The updated booking
/// - 404 (Not Found): Booking not found
/// - 409 (Conflict): The booking status machine does not allow the change
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/status",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Invalid status transition", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db)
        .admin_set_status(id, body.status.into())
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(booking)))
}
