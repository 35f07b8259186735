use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate};
use darshan_test_utils::{constant::TEST_PHONE, TestContext};
use entity::prelude::Booking;
use kashi_darshan::{
    model::booking::{
        BookingDto, BookingStatusDto, ConfirmPaymentDto, CreateBookingDto, PaymentStatusDto,
    },
    server::{
        controller::{
            booking::{
                cancel_booking, confirm_payment, create_booking, download_receipt, get_booking,
                list_bookings,
            },
            util::{cache::PRIVATE_NO_STORE, extractor::AuthUser},
        },
        util::time::ist_today,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::util::{json_body, raw_body};

fn visit_date(days_ahead: i64) -> NaiveDate {
    ist_today().expect("IST date") + Duration::days(days_ahead)
}

fn booking_request(temple: &MockTemple, persons: i32, date: NaiveDate) -> CreateBookingDto {
    CreateBookingDto {
        jyotirlinga_slug: temple.jyotirlinga.slug.clone(),
        darshan_type_id: temple.darshan_type.id,
        time_slot_id: temple.time_slot.id,
        visit_date: date,
        number_of_persons: persons,
        devotee_name: "Sita Devi".to_string(),
        devotee_phone: "98765-43210".to_string(),
    }
}

async fn setup(capacity: i32) -> Result<(TestContext, MockTemple, AuthUser), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    let temple = test
        .content()
        .insert_mock_temple("kashi-vishwanath", capacity)
        .await?;
    let user = test.user().insert_user(TEST_PHONE).await?;

    Ok((test, temple, AuthUser { user_id: user.id }))
}

#[tokio::test]
/// Expect 201 with a receipt number and the total computed from the darshan price
async fn create_booking_success() -> Result<(), TestError> {
    let (test, temple, auth) = setup(10).await?;

    let resp = create_booking(
        State(test.into_app_state()),
        auth,
        Json(booking_request(&temple, 2, visit_date(1))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    let booking: BookingDto = json_body(resp).await;
    assert!(booking.receipt_number.starts_with("KD-"));
    assert_eq!(booking.total_amount_paise, 60_000);
    assert_eq!(booking.devotee_phone, TEST_PHONE);
    assert_eq!(booking.status, BookingStatusDto::Confirmed);
    assert_eq!(booking.payment_status, PaymentStatusDto::Pending);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the slot has fewer seats left than requested
async fn create_booking_over_capacity() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(4).await?;
    let date = visit_date(2);
    test.booking()
        .insert_mock_booking(auth.user_id, &temple, date, 3)
        .await?;

    let resp = create_booking(
        State(test.into_app_state()),
        auth,
        Json(booking_request(&temple, 2, date)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a visit date in the past
async fn create_booking_in_past() -> Result<(), TestError> {
    let (test, temple, auth) = setup(10).await?;

    let resp = create_booking(
        State(test.into_app_state()),
        auth,
        Json(booking_request(&temple, 1, visit_date(-1))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the request fails validation before reaching the service
async fn create_booking_validates_body() -> Result<(), TestError> {
    let (test, temple, auth) = setup(10).await?;

    let mut request = booking_request(&temple, 0, visit_date(1));
    request.devotee_name = String::new();

    let resp = create_booking(State(test.into_app_state()), auth, Json(request))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 for a devotee name made only of whitespace, with nothing stored
async fn create_booking_rejects_blank_devotee_name() -> Result<(), TestError> {
    let (test, temple, auth) = setup(10).await?;

    let mut request = booking_request(&temple, 1, visit_date(1));
    request.devotee_name = "   ".to_string();

    let resp = create_booking(State(test.into_app_state()), auth, Json(request))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let stored = Booking::find().count(&test.db).await?;
    assert_eq!(stored, 0);

    Ok(())
}

#[tokio::test]
/// Expect the list to hold only the caller's bookings
async fn list_bookings_for_caller() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let other = test.user().insert_user("+919123456789").await?;

    test.booking()
        .insert_mock_booking(auth.user_id, &temple, visit_date(1), 1)
        .await?;
    test.booking()
        .insert_mock_booking(other.id, &temple, visit_date(1), 1)
        .await?;

    let resp = list_bookings(State(test.into_app_state()), auth)
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let bookings: Vec<BookingDto> = json_body(resp).await;
    assert_eq!(bookings.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect 404 when fetching another user's booking
async fn get_booking_of_other_user() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let other = test.user().insert_user("+919123456789").await?;
    let booking = test
        .booking()
        .insert_mock_booking(other.id, &temple, visit_date(1), 1)
        .await?;

    let resp = get_booking(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a cancelled unpaid booking to mark its payment failed, and a second cancel to conflict
async fn cancel_booking_once() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let booking = test
        .booking()
        .insert_mock_booking(auth.user_id, &temple, visit_date(1), 1)
        .await?;

    let resp = cancel_booking(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number.clone()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cancelled: BookingDto = json_body(resp).await;
    assert_eq!(cancelled.status, BookingStatusDto::Cancelled);
    assert_eq!(cancelled.payment_status, PaymentStatusDto::Failed);
    assert!(cancelled.cancelled_at.is_some());

    let resp = cancel_booking(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect payment confirmation to record the reference
async fn confirm_payment_completes_payment() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let booking = test
        .booking()
        .insert_mock_booking(auth.user_id, &temple, visit_date(1), 2)
        .await?;

    let resp = confirm_payment(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number),
        Json(ConfirmPaymentDto {
            reference: "pay_29QQoUBi66xm2f".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let paid: BookingDto = json_body(resp).await;
    assert_eq!(paid.payment_status, PaymentStatusDto::Completed);
    assert_eq!(paid.payment_reference.as_deref(), Some("pay_29QQoUBi66xm2f"));

    Ok(())
}

#[tokio::test]
/// Expect a PDF attachment that is never cached
async fn download_receipt_returns_pdf() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let booking = test
        .booking()
        .insert_mock_booking(auth.user_id, &temple, visit_date(1), 2)
        .await?;

    let resp = download_receipt(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number.clone()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let headers = resp.headers();
    assert_eq!(
        headers.get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some("application/pdf".as_bytes())
    );
    assert_eq!(
        headers.get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
        Some(PRIVATE_NO_STORE.as_bytes())
    );
    let disposition = headers
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains(&booking.receipt_number));

    let body = raw_body(resp).await;
    assert!(body.starts_with(b"%PDF"));

    Ok(())
}

#[tokio::test]
/// Expect 404 when downloading another user's receipt
async fn download_receipt_of_other_user() -> Result<(), TestError> {
    let (mut test, temple, auth) = setup(10).await?;
    let other = test.user().insert_user("+919123456789").await?;
    let booking = test
        .booking()
        .insert_mock_booking(other.id, &temple, visit_date(1), 1)
        .await?;

    let resp = download_receipt(
        State(test.into_app_state()),
        auth,
        Path(booking.receipt_number),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
