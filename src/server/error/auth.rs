use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No bearer token or session present on request")]
    MissingCredentials,
    #[error("Bearer token failed verification: {0}")]
    InvalidToken(String),
    #[error("Role {0:?} is not permitted to perform this action")]
    Forbidden(String),
    #[error("Phone number {0:?} is not a valid Indian mobile number")]
    InvalidPhone(String),
    #[error("OTP must be 4 to 8 digits")]
    InvalidOtpFormat,
    #[error("OTP was rejected by the provider")]
    OtpRejected,
    #[error("Phone number has not been verified in this session")]
    PhoneNotVerified,
    #[error("Phone number {0:?} is already registered")]
    PhoneAlreadyRegistered(String),
    #[error("No user registered for phone number {0:?}")]
    UnknownPhone(String),
    #[error("Invalid admin username or password")]
    InvalidCredentials,
    #[error("User ID {0:?} not found in database despite holding valid credentials")]
    UserNotInDatabase(i32),
    #[error("Failed to issue token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::Forbidden(_) => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::InvalidPhone(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Please enter a valid 10 digit mobile number",
            ),
            Self::InvalidOtpFormat => {
                error_response(StatusCode::BAD_REQUEST, "OTP must be 4 to 8 digits")
            }
            Self::OtpRejected => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired OTP")
            }
            Self::PhoneNotVerified => error_response(
                StatusCode::UNAUTHORIZED,
                "Please verify your phone number with an OTP first",
            ),
            Self::PhoneAlreadyRegistered(_) => error_response(
                StatusCode::CONFLICT,
                "An account with this phone number already exists",
            ),
            Self::UnknownPhone(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::TokenIssue(_) | Self::PasswordHash(_) => InternalServerError(self).into_response(),
        }
    }
}
