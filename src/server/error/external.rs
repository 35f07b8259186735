use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Failures talking to third-party services.
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("OTP provider returned status {status}: {body}")]
    OtpProvider { status: u16, body: String },
    #[error("Cloudinary returned status {status}: {body}")]
    Cloudinary { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for ExternalError {
    fn into_response(self) -> Response {
        tracing::error!("External service error: {}", self);

        let message = match self {
            Self::OtpProvider { .. } => "The OTP service is unavailable, please try again later",
            Self::Cloudinary { .. } => "The media service is unavailable, please try again later",
            Self::Http(_) => "An upstream service is unavailable, please try again later",
        };

        error_response(StatusCode::BAD_GATEWAY, message)
    }
}
