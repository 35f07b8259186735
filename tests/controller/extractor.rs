use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, Request, StatusCode},
    response::IntoResponse,
};
use darshan_test_utils::constant::TEST_PHONE;
use kashi_darshan::server::{
    controller::util::extractor::{AdminAuth, AuthUser},
    model::{auth::Role, session::user::SessionUserId},
};
use tower_sessions::Session;

use super::*;

fn parts(authorization: Option<&str>, session: Option<Session>) -> Parts {
    let mut builder = Request::builder().uri("/api/bookings");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let (mut parts, _) = builder.body(()).expect("Failed to build request").into_parts();
    if let Some(session) = session {
        parts.extensions.insert(session);
    }

    parts
}

#[tokio::test]
/// Expect a user bearer token to identify the devotee
async fn auth_user_from_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();
    let token = state.tokens.issue(7, Role::User).expect("Failed to issue token");

    let mut parts = parts(Some(&format!("Bearer {}", token)), None);
    let auth = AuthUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(auth.ok(), Some(AuthUser { user_id: 7 }));

    Ok(())
}

#[tokio::test]
/// Expect the session user when no bearer token is sent
async fn auth_user_from_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_content_tables().build().await?;
    let user = test.user().insert_user(TEST_PHONE).await?;
    SessionUserId::insert(&test.session, user.id)
        .await
        .expect("Failed to store user id");
    let state = test.into_app_state();

    let mut parts = parts(None, Some(test.session.clone()));
    let auth = AuthUser::from_request_parts(&mut parts, &state).await;

    assert_eq!(auth.ok(), Some(AuthUser { user_id: user.id }));

    Ok(())
}

#[tokio::test]
/// Expect 401 without credentials and for a tampered token
async fn auth_user_rejects_missing_or_invalid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let mut anonymous = parts(None, Some(test.session.clone()));
    let result = AuthUser::from_request_parts(&mut anonymous, &state).await;
    let resp = result.err().expect("Expected rejection").into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let mut tampered = parts(Some("Bearer not.a.token"), None);
    let result = AuthUser::from_request_parts(&mut tampered, &state).await;
    let resp = result.err().expect("Expected rejection").into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a staff token is used on a devotee route and the reverse
async fn roles_do_not_cross_over() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let admin_token = state.tokens.issue(1, Role::Admin).expect("Failed to issue token");
    let mut staff = parts(Some(&format!("Bearer {}", admin_token)), None);
    let result = AuthUser::from_request_parts(&mut staff, &state).await;
    let resp = result.err().expect("Expected rejection").into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let user_token = state.tokens.issue(1, Role::User).expect("Failed to issue token");
    let mut devotee = parts(Some(&format!("Bearer {}", user_token)), None);
    let result = AdminAuth::from_request_parts(&mut devotee, &state).await;
    let resp = result.err().expect("Expected rejection").into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect the admin extractor to ignore the session and keep the token's role
async fn admin_auth_requires_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();

    let mut session_only = parts(None, Some(test.session.clone()));
    let result = AdminAuth::from_request_parts(&mut session_only, &state).await;
    let resp = result.err().expect("Expected rejection").into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let editor_token = state.tokens.issue(3, Role::Editor).expect("Failed to issue token");
    let mut editor = parts(Some(&format!("Bearer {}", editor_token)), None);
    let admin = AdminAuth::from_request_parts(&mut editor, &state)
        .await
        .ok()
        .expect("Editor token should be accepted");

    assert_eq!(admin.admin_id, 3);
    assert_eq!(admin.role, Role::Editor);
    assert!(admin.require_admin().is_err());

    Ok(())
}
