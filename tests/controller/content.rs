use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::Duration;
use entity::booking::{BookingStatus, PaymentStatus};
use kashi_darshan::{
    model::content::{JyotirlingaDetailDto, JyotirlingaDto, SlotAvailabilityDto},
    server::{
        controller::{
            content::{
                get_jyotirlinga, get_slot_availability, list_cities, list_jyotirlingas,
                random_quote, JyotirlingaQuery, SlotQuery,
            },
            util::cache::PRIVATE_NO_CACHE,
        },
        util::time::ist_today,
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use super::*;
use crate::util::json_body;

#[tokio::test]
/// Expect public caching on content lists
async fn list_cities_is_publicly_cached() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_temple("kashi-vishwanath", 10)
        .build()
        .await?;

    let resp = list_cities(State(test.into_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cache_control = resp
        .headers()
        .get(header::CACHE_CONTROL)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert_eq!(cache_control, "public, max-age=300, stale-while-revalidate=60");

    Ok(())
}

#[tokio::test]
/// Expect inactive temples to be hidden from the list and the city filter to apply
async fn list_jyotirlingas_filters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_temple("kashi-vishwanath", 10)
        .with_mock_temple("kedareshwar", 10)
        .build()
        .await?;

    let kedareshwar = entity::prelude::Jyotirlinga::find_by_id(2)
        .one(&test.db)
        .await?
        .expect("Temple fixture missing");
    let mut kedareshwar = kedareshwar.into_active_model();
    kedareshwar.is_active = ActiveValue::Set(false);
    kedareshwar.update(&test.db).await?;

    let resp = list_jyotirlingas(
        State(test.into_app_state()),
        Query(JyotirlingaQuery { city: None }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let temples: Vec<JyotirlingaDto> = json_body(resp).await;
    assert_eq!(temples.len(), 1);
    assert_eq!(temples[0].slug, "kashi-vishwanath");

    let resp = list_jyotirlingas(
        State(test.into_app_state()),
        Query(JyotirlingaQuery {
            city: Some("prayagraj".to_string()),
        }),
    )
    .await
    .into_response();
    let temples: Vec<JyotirlingaDto> = json_body(resp).await;
    assert!(temples.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect a temple detail with its city and darshan types
async fn get_jyotirlinga_returns_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_temple("kashi-vishwanath", 10)
        .build()
        .await?;

    let resp = get_jyotirlinga(
        State(test.into_app_state()),
        Path("kashi-vishwanath".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let detail: JyotirlingaDetailDto = json_body(resp).await;
    assert_eq!(detail.city.slug, "varanasi");
    assert_eq!(detail.darshan_types.len(), 1);
    assert_eq!(detail.darshan_types[0].price_paise, 30_000);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an unknown temple slug
async fn get_jyotirlinga_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let resp = get_jyotirlinga(State(test.into_app_state()), Path("somnath".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect cancelled bookings to free their seats, served without caching
async fn slot_availability_ignores_cancelled_bookings() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    let temple = test
        .content()
        .insert_mock_temple("kashi-vishwanath", 10)
        .await?;
    let user = test.user().insert_user("+919876543210").await?;
    let visit_date = ist_today().expect("IST date") + Duration::days(3);

    test.booking()
        .insert_mock_booking(user.id, &temple, visit_date, 3)
        .await?;
    test.booking()
        .insert_mock_booking_with(
            user.id,
            &temple,
            visit_date,
            4,
            BookingStatus::Cancelled,
            PaymentStatus::Refunded,
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let resp = get_slot_availability(
        State(test.into_app_state()),
        Path(temple.darshan_type.id),
        Query(SlotQuery { date: visit_date }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
        Some(PRIVATE_NO_CACHE.as_bytes())
    );

    let slots: Vec<SlotAvailabilityDto> = json_body(resp).await;
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].capacity, 10);
    assert_eq!(slots[0].booked, 3);
    assert_eq!(slots[0].available, 7);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a darshan type that does not exist
async fn slot_availability_unknown_darshan_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let resp = get_slot_availability(
        State(test.into_app_state()),
        Path(99),
        Query(SlotQuery {
            date: ist_today().expect("IST date"),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a quote when one is active and 404 when none are
async fn random_quote_requires_active_quote() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;

    let resp = random_quote(State(test.into_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    test.content()
        .insert_mock_quote("Kashi is the city of liberation.")
        .await?;

    let resp = random_quote(State(test.into_app_state())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
