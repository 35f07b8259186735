use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveTime};
use darshan_test_utils::constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME, TEST_PHONE};
use entity::admin_user::AdminRole;
use kashi_darshan::{
    model::{
        admin::{
            AdminLoginDto, AdminTokenDto, BookingFilterDto, MediaUploadDto, UpdateBookingStatusDto,
            UpsertCityDto, UpsertDarshanTypeDto, UpsertJyotirlingaDto, UpsertQuoteDto,
            UpsertTimeSlotDto,
        },
        booking::{BookingDto, BookingStatusDto, PaymentStatusDto},
        content::{DarshanTypeDto, QuoteDto, TimeSlotDto},
        i18n::LocalizedTextDto,
    },
    server::{
        controller::{
            admin::{
                auth::login,
                booking::{list_bookings, update_booking_status},
                content::{
                    create_city, create_jyotirlinga, delete_city, delete_quote,
                    update_darshan_type, update_quote, update_time_slot,
                },
                media::{delete_media, upload_media, DeleteMediaQuery},
            },
            util::extractor::AdminAuth,
        },
        model::auth::Role,
        util::time::ist_today,
    },
};

use super::*;
use crate::util::{json_body, multipart_upload};

const ADMIN: AdminAuth = AdminAuth {
    admin_id: 1,
    role: Role::Admin,
};

const EDITOR: AdminAuth = AdminAuth {
    admin_id: 2,
    role: Role::Editor,
};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];

fn text(en: &str) -> LocalizedTextDto {
    LocalizedTextDto {
        en: en.to_string(),
        hi: None,
    }
}

fn city(slug: &str) -> UpsertCityDto {
    UpsertCityDto {
        slug: slug.to_string(),
        name: text("Prayagraj"),
        state: text("Uttar Pradesh"),
        description: text("Confluence of three rivers."),
        image_url: None,
    }
}

fn darshan_type(jyotirlinga_id: i32) -> UpsertDarshanTypeDto {
    UpsertDarshanTypeDto {
        jyotirlinga_id,
        slug: "special-darshan".to_string(),
        name: text("Special Darshan"),
        description: text("Quick entry through the VIP gate."),
        price_paise: 50_000,
        duration_minutes: 45,
        max_persons_per_booking: 4,
        is_active: true,
    }
}

fn time_slot(darshan_type_id: i32, start: (u32, u32), end: (u32, u32)) -> UpsertTimeSlotDto {
    UpsertTimeSlotDto {
        darshan_type_id,
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).expect("valid time"),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).expect("valid time"),
        capacity: 25,
        is_active: true,
    }
}

mod auth {
    use super::*;

    #[tokio::test]
    /// Expect a token carrying the account's role
    async fn login_with_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_content_tables()
            .with_mock_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD, AdminRole::Editor)
            .build()
            .await?;

        let resp = login(
            State(test.into_app_state()),
            Json(AdminLoginDto {
                username: TEST_ADMIN_USERNAME.to_string(),
                password: TEST_ADMIN_PASSWORD.to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let token: AdminTokenDto = json_body(resp).await;
        assert_eq!(token.role, "editor");

        let claims = test
            .into_app_state()
            .tokens
            .verify(&token.token)
            .expect("Issued token should verify");
        assert_eq!(claims.role, Role::Editor);

        Ok(())
    }

    #[tokio::test]
    /// Expect the same 401 for a wrong password and an unknown username
    async fn login_with_invalid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_content_tables()
            .with_mock_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD, AdminRole::Admin)
            .build()
            .await?;

        for (username, password) in [(TEST_ADMIN_USERNAME, "wrong"), ("nobody", TEST_ADMIN_PASSWORD)] {
            let resp = login(
                State(test.into_app_state()),
                Json(AdminLoginDto {
                    username: username.to_string(),
                    password: password.to_string(),
                }),
            )
            .await
            .into_response();

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }

        Ok(())
    }
}

mod content {
    use super::*;

    #[tokio::test]
    /// Expect 201 for a new city and 409 when the slug is taken
    async fn create_city_rejects_duplicate_slug() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let resp = create_city(State(test.into_app_state()), ADMIN, Json(city("prayagraj")))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = create_city(State(test.into_app_state()), EDITOR, Json(city("prayagraj")))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 for a slug with uppercase letters or spaces
    async fn create_city_validates_slug() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let resp = create_city(State(test.into_app_state()), ADMIN, Json(city("Prayag Raj")))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the referenced city does not exist
    async fn create_jyotirlinga_requires_city() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;

        let resp = create_jyotirlinga(
            State(test.into_app_state()),
            ADMIN,
            Json(UpsertJyotirlingaDto {
                slug: "omkareshwar".to_string(),
                city_id: 42,
                name: text("Omkareshwar"),
                description: text("Temple on the Narmada."),
                significance: text("One of the twelve Jyotirlingas."),
                address: "Mandhata, Khandwa".to_string(),
                image_url: None,
                gallery: Vec::new(),
                is_active: true,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect editors to be refused deletes
    async fn delete_requires_admin_role() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let quote = test.content().insert_mock_quote("Har Har Mahadev").await?;

        let resp = delete_quote(State(test.into_app_state()), EDITOR, Path(quote.id))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = delete_quote(State(test.into_app_state()), ADMIN, Path(quote.id))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 when deleting a city that still has temples
    async fn delete_city_in_use() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_content_tables()
            .with_mock_temple("kashi-vishwanath", 10)
            .build()
            .await?;

        let resp = delete_city(State(test.into_app_state()), ADMIN, Path(1))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 with the new values when updating an existing darshan type
    async fn update_darshan_type_success() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let resp = update_darshan_type(
            State(test.into_app_state()),
            EDITOR,
            Path(temple.darshan_type.id),
            Json(darshan_type(temple.jyotirlinga.id)),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: DarshanTypeDto = json_body(resp).await;
        assert_eq!(updated.id, temple.darshan_type.id);
        assert_eq!(updated.slug, "special-darshan");
        assert_eq!(updated.price_paise, 50_000);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when updating a darshan type that does not exist
    async fn update_darshan_type_not_found() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let resp = update_darshan_type(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.darshan_type.id + 100),
            Json(darshan_type(temple.jyotirlinga.id)),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when moving a darshan type under a temple that does not exist
    async fn update_darshan_type_requires_temple() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let resp = update_darshan_type(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.darshan_type.id),
            Json(darshan_type(temple.jyotirlinga.id + 100)),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when updating a darshan type to a price above the cap
    async fn update_darshan_type_validates_price() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let mut body = darshan_type(temple.jyotirlinga.id);
        body.price_paise = i64::MAX / 2 + 1;

        let resp = update_darshan_type(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.darshan_type.id),
            Json(body),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 for a valid window and 400 when the slot would end before it starts
    async fn update_time_slot_checks_window() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let resp = update_time_slot(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.time_slot.id),
            Json(time_slot(temple.darshan_type.id, (9, 0), (10, 30))),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: TimeSlotDto = json_body(resp).await;
        assert_eq!(updated.capacity, 25);
        assert_eq!(updated.end_time, NaiveTime::from_hms_opt(10, 30, 0).expect("valid time"));

        for (start, end) in [((10, 0), (9, 0)), ((9, 0), (9, 0))] {
            let resp = update_time_slot(
                State(test.into_app_state()),
                ADMIN,
                Path(temple.time_slot.id),
                Json(time_slot(temple.darshan_type.id, start, end)),
            )
            .await
            .into_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an unknown slot and 400 for an unknown darshan type
    async fn update_time_slot_missing_rows() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;

        let resp = update_time_slot(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.time_slot.id + 100),
            Json(time_slot(temple.darshan_type.id, (9, 0), (10, 0))),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = update_time_slot(
            State(test.into_app_state()),
            ADMIN,
            Path(temple.time_slot.id),
            Json(time_slot(temple.darshan_type.id + 100, (9, 0), (10, 0))),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 when updating a quote and 404 for an unknown one
    async fn update_quote_by_id() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let quote = test.content().insert_mock_quote("Har Har Mahadev").await?;

        let body = UpsertQuoteDto {
            text: text("Om Namah Shivaya"),
            author: text("Panchakshara mantra"),
            is_active: true,
        };

        let resp = update_quote(
            State(test.into_app_state()),
            EDITOR,
            Path(quote.id),
            Json(body.clone()),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: QuoteDto = json_body(resp).await;
        assert_eq!(updated.text.en, "Om Namah Shivaya");

        let resp = update_quote(State(test.into_app_state()), EDITOR, Path(quote.id + 100), Json(body))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod booking {
    use super::*;

    #[tokio::test]
    /// Expect the status filter to apply
    async fn list_bookings_by_status() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;
        let user = test.user().insert_user(TEST_PHONE).await?;
        let date = ist_today().expect("IST date") + Duration::days(1);

        test.booking()
            .insert_mock_booking(user.id, &temple, date, 1)
            .await?;
        test.booking()
            .insert_mock_booking_with(
                user.id,
                &temple,
                date,
                1,
                entity::booking::BookingStatus::Cancelled,
                entity::booking::PaymentStatus::Failed,
                chrono::Utc::now().naive_utc(),
            )
            .await?;

        let resp = list_bookings(
            State(test.into_app_state()),
            EDITOR,
            Query(BookingFilterDto {
                date: Some(date),
                status: Some(BookingStatusDto::Cancelled),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let bookings: Vec<BookingDto> = json_body(resp).await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].status, BookingStatusDto::Cancelled);

        Ok(())
    }

    #[tokio::test]
    /// Expect cancelling a paid booking to refund it
    async fn update_status_refunds_paid_booking() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_content_tables().build().await?;
        let temple = test
            .content()
            .insert_mock_temple("kashi-vishwanath", 10)
            .await?;
        let user = test.user().insert_user(TEST_PHONE).await?;
        let booking = test
            .booking()
            .insert_mock_booking_with(
                user.id,
                &temple,
                ist_today().expect("IST date") + Duration::days(1),
                2,
                entity::booking::BookingStatus::Confirmed,
                entity::booking::PaymentStatus::Completed,
                chrono::Utc::now().naive_utc(),
            )
            .await?;

        let resp = update_booking_status(
            State(test.into_app_state()),
            ADMIN,
            Path(booking.id),
            Json(UpdateBookingStatusDto {
                status: BookingStatusDto::Cancelled,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: BookingDto = json_body(resp).await;
        assert_eq!(updated.status, BookingStatusDto::Cancelled);
        assert_eq!(updated.payment_status, PaymentStatusDto::Refunded);

        Ok(())
    }
}

mod media {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the CDN URL for a JPEG
    async fn upload_jpeg() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_upload_endpoint("temples/kashi", JPEG_BYTES.len() as u64, "jpg", 1)
            .build()
            .await?;

        let multipart = multipart_upload("kashi.jpg", "image/jpeg", JPEG_BYTES, Some("temples")).await;
        let resp = upload_media(State(test.into_app_state()), EDITOR, multipart)
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let media: MediaUploadDto = json_body(resp).await;
        assert_eq!(media.public_id, "temples/kashi");
        assert!(media.url.starts_with("https://"));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 415 without calling Cloudinary when the bytes are not an image
    async fn upload_rejects_non_image() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_upload_endpoint("temples/kashi", 0, "png", 0)
            .build()
            .await?;

        let multipart =
            multipart_upload("kashi.png", "image/png", b"#!/bin/sh\necho hello\n", None).await;
        let resp = upload_media(State(test.into_app_state()), ADMIN, multipart)
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect 400 when the declared type does not match the bytes
    async fn upload_rejects_mismatched_content_type() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_upload_endpoint("temples/kashi", 0, "png", 0)
            .build()
            .await?;

        let multipart = multipart_upload("kashi.png", "image/png", JPEG_BYTES, None).await;
        let resp = upload_media(State(test.into_app_state()), ADMIN, multipart)
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect deletes to be reserved to administrators
    async fn delete_media_requires_admin() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_destroy_endpoint("ok", 1)
            .build()
            .await?;

        let query = || {
            Query(DeleteMediaQuery {
                public_id: "temples/kashi".to_string(),
            })
        };

        let resp = delete_media(State(test.into_app_state()), EDITOR, query())
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = delete_media(State(test.into_app_state()), ADMIN, query())
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        test.assert_mocks();

        Ok(())
    }
}
