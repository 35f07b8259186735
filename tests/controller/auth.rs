use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use darshan_test_utils::constant::TEST_PHONE;
use entity::prelude::AppUser;
use kashi_darshan::{
    model::{
        i18n::Language,
        user::{AuthTokenDto, LoginDto, OtpVerificationDto, RegisterUserDto, SendOtpDto, VerifyOtpDto},
    },
    server::{
        controller::{
            auth::{login, logout, me, register, send_otp, verify_otp},
            util::extractor::AuthUser,
        },
        model::session::{otp::SessionVerifiedPhone, user::SessionUserId},
    },
};
use sea_orm::EntityTrait;

use super::*;
use crate::util::json_body;

fn verify_body(otp: &str) -> Json<VerifyOtpDto> {
    Json(VerifyOtpDto {
        phone: "98765 43210".to_string(),
        otp: otp.to_string(),
    })
}

#[tokio::test]
/// Expect 202 once the provider accepts the send request for the normalized number
async fn send_otp_normalizes_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_send_endpoint(TEST_PHONE, 200, 1)
        .build()
        .await?;

    let result = send_otp(
        State(test.into_app_state()),
        Json(SendOtpDto {
            phone: "09876543210".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 400 without calling the provider for a number that is not an Indian mobile
async fn send_otp_rejects_invalid_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_send_endpoint(TEST_PHONE, 200, 0)
        .build()
        .await?;

    let result = send_otp(
        State(test.into_app_state()),
        Json(SendOtpDto {
            phone: "12345".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 502 when the OTP provider fails
async fn send_otp_maps_provider_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_otp_send_endpoint(TEST_PHONE, 500, 1)
        .build()
        .await?;

    let result = send_otp(
        State(test.into_app_state()),
        Json(SendOtpDto {
            phone: TEST_PHONE.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

#[tokio::test]
/// Expect a new user to be asked to register with the verified phone kept in session
async fn verify_otp_for_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_otp_verify_endpoint(TEST_PHONE, true, 1)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify_body("123456"),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: OtpVerificationDto = json_body(resp).await;
    assert!(body.is_new_user);
    assert!(body.token.is_none());
    assert_eq!(body.phone, TEST_PHONE);

    let verified = SessionVerifiedPhone::get(&test.session).await.ok().flatten();
    assert_eq!(verified.as_deref(), Some(TEST_PHONE));
    let user_id = SessionUserId::get(&test.session).await.ok().flatten();
    assert!(user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect an existing user to be logged in straight away
async fn verify_otp_logs_in_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_user(TEST_PHONE)
        .with_otp_verify_endpoint(TEST_PHONE, true, 1)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify_body("123456"),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: OtpVerificationDto = json_body(resp).await;
    assert!(!body.is_new_user);
    assert!(body.token.is_some());
    assert_eq!(body.user.map(|user| user.phone).as_deref(), Some(TEST_PHONE));

    let user_id = SessionUserId::get(&test.session).await.ok().flatten();
    assert!(user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 401 when the provider rejects the code
async fn verify_otp_rejects_wrong_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_otp_verify_endpoint(TEST_PHONE, false, 1)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify_body("000000"),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let verified = SessionVerifiedPhone::get(&test.session).await.ok().flatten();
    assert!(verified.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 400 without calling the provider for a malformed code
async fn verify_otp_rejects_malformed_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_otp_verify_endpoint(TEST_PHONE, true, 0)
        .build()
        .await?;

    let result = verify_otp(
        State(test.into_app_state()),
        test.session.clone(),
        verify_body("12ab"),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 201 with a token after registering a verified phone
async fn register_creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    SessionVerifiedPhone::insert(&test.session, TEST_PHONE)
        .await
        .expect("Failed to store verified phone");

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        Json(RegisterUserDto {
            name: "Ravi Shankar".to_string(),
            email: Some("ravi@example.com".to_string()),
            preferred_language: Language::Hi,
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: AuthTokenDto = json_body(resp).await;
    assert_eq!(body.user.phone, TEST_PHONE);
    assert_eq!(body.user.preferred_language, Language::Hi);

    let users = AppUser::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);

    let verified = SessionVerifiedPhone::get(&test.session).await.ok().flatten();
    assert!(verified.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 when registering without a verified phone
async fn register_requires_verified_phone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        Json(RegisterUserDto {
            name: "Ravi Shankar".to_string(),
            email: None,
            preferred_language: Language::En,
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let users = AppUser::find().all(&test.db).await?;
    assert!(users.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 for a name made only of whitespace, keeping the verified phone for a retry
async fn register_rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    SessionVerifiedPhone::insert(&test.session, TEST_PHONE)
        .await
        .expect("Failed to store verified phone");

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        Json(RegisterUserDto {
            name: " \t ".to_string(),
            email: None,
            preferred_language: Language::En,
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let users = AppUser::find().all(&test.db).await?;
    assert!(users.is_empty());

    let verified = SessionVerifiedPhone::get(&test.session).await.ok().flatten();
    assert!(verified.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 when the verified phone already has an account
async fn register_rejects_existing_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_user(TEST_PHONE)
        .build()
        .await?;
    SessionVerifiedPhone::insert(&test.session, TEST_PHONE)
        .await
        .expect("Failed to store verified phone");

    let result = register(
        State(test.into_app_state()),
        test.session.clone(),
        Json(RegisterUserDto {
            name: "Ravi Shankar".to_string(),
            email: None,
            preferred_language: Language::En,
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 when logging in with a verified phone that has no account
async fn login_with_unknown_phone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    SessionVerifiedPhone::insert(&test.session, TEST_PHONE)
        .await
        .expect("Failed to store verified phone");

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            phone: TEST_PHONE.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 when logging in with a phone other than the verified one
async fn login_requires_matching_verified_phone() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_mock_user(TEST_PHONE)
        .build()
        .await?;
    SessionVerifiedPhone::insert(&test.session, "+919123456789")
        .await
        .expect("Failed to store verified phone");

    let result = login(
        State(test.into_app_state()),
        test.session.clone(),
        Json(LoginDto {
            phone: TEST_PHONE.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the logged in user
async fn me_returns_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    let user = test.user().insert_user(TEST_PHONE).await?;

    let result = me(
        State(test.into_app_state()),
        test.session.clone(),
        AuthUser { user_id: user.id },
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the session user no longer exists
async fn me_clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    SessionUserId::insert(&test.session, 42)
        .await
        .expect("Failed to store user id");

    let result = me(
        State(test.into_app_state()),
        test.session.clone(),
        AuthUser { user_id: 42 },
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let user_id = SessionUserId::get(&test.session).await.ok().flatten();
    assert!(user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 200 after logout, with or without a logged in user
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1)
        .await
        .expect("Failed to store user id");

    let resp = logout(test.session.clone()).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let user_id = SessionUserId::get(&test.session).await.ok().flatten();
    assert!(user_id.is_none());

    let resp = logout(test.session.clone()).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
