use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use dioxus_logger::tracing;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            AuthTokenDto, LoginDto, OtpVerificationDto, RegisterUserDto, SendOtpDto, UserDto,
            VerifyOtpDto,
        },
    },
    server::{
        controller::util::{cache::private_no_cache, extractor::AuthUser},
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            auth::Role,
            db::UserModel,
            session::{otp::SessionVerifiedPhone, user::SessionUserId},
        },
        service::{auth::otp::mask_phone, user::UserService},
        util::phone::normalize_phone,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Sends an OTP to a mobile number
///
/// # Responses
/// - 202 (Accepted): The provider accepted the request and will deliver the code
/// - 400 (Bad Request): The phone number is not a valid Indian mobile number
/// - 502 (Bad Gateway): The OTP provider failed
#[utoipa::path(
    post,
    path = "/api/auth/otp/send",
    tag = AUTH_TAG,
    request_body = SendOtpDto,
    responses(
        (status = 202, description = "OTP sent", body = MessageDto),
        (status = 400, description = "Invalid phone number", body = ErrorDto),
        (status = 502, description = "OTP provider unavailable", body = ErrorDto)
    ),
)]
pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let phone = normalize_phone(&body.phone)?;

    state.otp_client.send(&phone).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "OTP sent".to_string(),
        }),
    ))
}

/// Verifies an OTP and marks the phone as verified for this session
///
/// Registered users are logged in straight away. New users continue with `register`.
///
/// # Responses
/// - 200 (OK): OTP verified, carries a token when the phone belongs to a registered user
/// - 400 (Bad Request): Invalid phone number or OTP format
/// - 401 (Unauthorized): The provider rejected the OTP
/// - 502 (Bad Gateway): The OTP provider failed
#[utoipa::path(
    post,
    path = "/api/auth/otp/verify",
    tag = AUTH_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "OTP verified", body = OtpVerificationDto),
        (status = 400, description = "Invalid phone number or OTP format", body = ErrorDto),
        (status = 401, description = "Invalid or expired OTP", body = ErrorDto),
        (status = 502, description = "OTP provider unavailable", body = ErrorDto)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<VerifyOtpDto>,
) -> Result<impl IntoResponse, Error> {
    let phone = normalize_phone(&body.phone)?;

    if !state.otp_client.verify(&phone, body.otp.trim()).await? {
        tracing::debug!("OTP rejected for {}", mask_phone(&phone));

        return Err(AuthError::OtpRejected.into());
    }

    SessionVerifiedPhone::insert(&session, &phone).await?;

    let verification = match UserService::new(&state.db).get_by_phone(&phone).await? {
        Some(user) => {
            let login = log_in(&state, &session, user).await?;

            OtpVerificationDto {
                phone,
                is_new_user: false,
                token: Some(login.token),
                user: Some(login.user),
            }
        }
        None => OtpVerificationDto {
            phone,
            is_new_user: true,
            token: None,
            user: None,
        },
    };

    Ok((StatusCode::OK, private_no_cache(), Json(verification)))
}

/// Registers a new user for the phone verified in this session
///
/// # Responses
/// - 201 (Created): User created and logged in
/// - 400 (Bad Request): Invalid name or email
/// - 401 (Unauthorized): No phone has been verified in this session
/// - 409 (Conflict): The phone number is already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = AuthTokenDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Phone not verified", body = ErrorDto),
        (status = 409, description = "Phone already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let Some(phone) = SessionVerifiedPhone::get(&session).await? else {
        return Err(AuthError::PhoneNotVerified.into());
    };

    body.validate()?;

    let user = UserService::new(&state.db).register(&phone, &body).await?;
    SessionVerifiedPhone::remove(&session).await?;

    tracing::info!("Registered user {} for {}", user.id, mask_phone(&phone));

    let login = log_in(&state, &session, user).await?;

    Ok((StatusCode::CREATED, private_no_cache(), Json(login)))
}

/// Logs in the user owning the phone verified in this session
///
/// # Responses
/// - 200 (OK): Logged in
/// - 400 (Bad Request): Invalid phone number
/// - 401 (Unauthorized): The phone has not been verified in this session
/// - 404 (Not Found): No user is registered for the phone
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthTokenDto),
        (status = 400, description = "Invalid phone number", body = ErrorDto),
        (status = 401, description = "Phone not verified", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let phone = normalize_phone(&body.phone)?;

    let verified = SessionVerifiedPhone::get(&session).await?;
    if verified.as_deref() != Some(phone.as_str()) {
        return Err(AuthError::PhoneNotVerified.into());
    }

    let Some(user) = UserService::new(&state.db).get_by_phone(&phone).await? else {
        return Err(AuthError::UnknownPhone(mask_phone(&phone)).into());
    };

    let login = log_in(&state, &session, user).await?;

    Ok((StatusCode::OK, private_no_cache(), Json(login)))
}

/// Returns the logged in user
///
/// # Responses
/// - 200 (OK): The current user
/// - 401 (Unauthorized): No credentials
/// - 404 (Not Found): The user no longer exists, the session is cleared
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(auth.user_id).await? else {
        session.clear().await;

        tracing::warn!(
            "User ID {} holds valid credentials but was not found in database; cleared session",
            auth.user_id
        );

        return Err(AuthError::UserNotInDatabase(auth.user_id).into());
    };

    Ok((StatusCode::OK, private_no_cache(), Json(UserDto::from(user))))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 200 (OK): Logged out, also when there was nothing to clear
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Stores the user in the session and issues a bearer token
async fn log_in(state: &AppState, session: &Session, user: UserModel) -> Result<AuthTokenDto, Error> {
    // New session id on privilege change
    session.cycle_id().await?;
    SessionUserId::insert(session, user.id).await?;

    let token = state.tokens.issue(user.id, Role::User)?;

    Ok(AuthTokenDto {
        token,
        user: user.into(),
    })
}
