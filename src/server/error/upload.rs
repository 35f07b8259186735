use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Multipart request has no `file` field")]
    MissingFile,
    #[error("Uploaded file is empty")]
    Empty,
    #[error("Uploaded file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("File type is not supported, upload a JPEG, PNG, GIF or WebP image")]
    UnsupportedType,
    #[error("Declared content type {declared:?} does not match detected type {detected:?}")]
    ContentTypeMismatch {
        declared: String,
        detected: &'static str,
    },
    #[error("Folder {0:?} may only contain lowercase letters, digits, '-', '_' and '/'")]
    InvalidFolder(String),
    #[error("Malformed multipart request: {0}")]
    Multipart(String),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::UnsupportedType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for UploadError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::Multipart(err.body_text())
    }
}
