use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, ConfirmPaymentDto, CreateBookingDto},
    },
    server::{
        controller::util::{
            cache::{private_no_cache, PRIVATE_NO_STORE},
            extractor::AuthUser,
        },
        error::Error,
        model::app::AppState,
        service::booking::BookingService,
    },
};

pub static BOOKING_TAG: &str = "booking";

/// Books a darshan slot
///
/// # Responses
/// - 201 (Created): The booking, confirmed with a pending payment
/// - 400 (Bad Request): Invalid date, party size, phone, or content that does not fit together
/// - 401 (Unauthorized): Not logged in
/// - 404 (Not Found): Unknown temple, darshan type or slot
/// - 409 (Conflict): Not enough places left in the slot
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 409, description = "Slot is full", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let booking = BookingService::new(&state.db)
        .create(auth.user_id, body)
        .await?;

    Ok((StatusCode::CREATED, private_no_cache(), Json(booking)))
}

/// Lists the bookings of the logged in user, newest first
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 401, description = "Authentication required", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let bookings = BookingService::new(&state.db)
        .list_for_user(auth.user_id)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(bookings)))
}

/// Gets a booking by receipt number
///
/// Bookings of other users answer 404 so receipt numbers cannot be guessed.
#[utoipa::path(
    get,
    path = "/api/bookings/{receipt}",
    tag = BOOKING_TAG,
    params(("receipt" = String, Path, description = "Receipt number")),
    responses(
        (status = 200, description = "Booking", body = BookingDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(receipt): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db)
        .get_for_user(auth.user_id, &receipt)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(booking)))
}

/// Cancels an upcoming booking
///
/// # Responses
/// - 200 (OK): The cancelled booking, a completed payment is marked refunded
/// - 404 (Not Found): Booking not found
/// - 409 (Conflict): The booking is not confirmed or its visit date has passed
#[utoipa::path(
    post,
    path = "/api/bookings/{receipt}/cancel",
    tag = BOOKING_TAG,
    params(("receipt" = String, Path, description = "Receipt number")),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking cannot be cancelled", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(receipt): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let booking = BookingService::new(&state.db)
        .cancel(auth.user_id, &receipt)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(booking)))
}

/// Records a payment for a booking
///
/// Stands in for the payment gateway callback.
#[utoipa::path(
    post,
    path = "/api/bookings/{receipt}/payment",
    tag = BOOKING_TAG,
    params(("receipt" = String, Path, description = "Receipt number")),
    request_body = ConfirmPaymentDto,
    responses(
        (status = 200, description = "Payment recorded", body = BookingDto),
        (status = 400, description = "Invalid payment reference", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Payment cannot be completed", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(receipt): Path<String>,
    Json(body): Json<ConfirmPaymentDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let booking = BookingService::new(&state.db)
        .confirm_payment(auth.user_id, &receipt, &body.reference)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(booking)))
}

/// Downloads the PDF receipt of a booking
#[utoipa::path(
    get,
    path = "/api/bookings/{receipt}/receipt",
    tag = BOOKING_TAG,
    params(("receipt" = String, Path, description = "Receipt number")),
    responses(
        (status = 200, description = "PDF receipt", content_type = "application/pdf"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn download_receipt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(receipt): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let (booking, pdf) = BookingService::new(&state.db)
        .receipt_pdf(auth.user_id, &receipt)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.pdf\"", booking.receipt_number),
            ),
            (header::CACHE_CONTROL, PRIVATE_NO_STORE.to_string()),
        ],
        pdf,
    ))
}
