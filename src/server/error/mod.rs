//! Error types for the Kashi Darshan server application.
//!
//! Each domain (authentication, configuration, content, bookings, uploads, external services)
//! has its own `thiserror` enum implementing `IntoResponse`. They are aggregated in [`Error`]
//! so handlers can use `?` on any of them, along with the library errors the server touches.

pub mod auth;
pub mod booking;
pub mod config;
pub mod content;
pub mod external;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, content::ContentError,
        external::ExternalError, upload::UploadError,
    },
};

/// Main error type for the Kashi Darshan server application.
///
/// Domain errors map to their own HTTP responses, every other variant is logged and returned
/// to the client as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (tokens, OTP verification, sessions).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Content lookup or management error.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Booking rule violation.
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Media upload rejected.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Third-party service failure (OTP provider, Cloudinary).
    #[error(transparent)]
    ExternalError(#[from] ExternalError),
    /// Request body failed validation.
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Receipt PDF could not be rendered.
    #[error("Failed to render receipt: {0}")]
    ReceiptError(String),
    /// Internal error indicating a bug.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::ExternalError(err) => err.into_response(),
            Self::ValidationError(err) => {
                tracing::debug!("Request validation failed: {}", err);

                error_response(StatusCode::BAD_REQUEST, format!("Invalid request: {}", err))
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged and a generic message is returned so implementation details never
/// reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
