use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{kind} {key:?} not found")]
    NotFound { kind: &'static str, key: String },
    #[error("Slug {0:?} is already in use")]
    SlugTaken(String),
    #[error("{0} is still referenced by bookings or other content")]
    InUse(&'static str),
    #[error("Referenced {kind} {id} does not exist")]
    MissingParent { kind: &'static str, id: i32 },
}

impl ContentError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { kind, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("{} not found", kind))
            }
            Self::SlugTaken(_) | Self::InUse(_) => {
                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::MissingParent { .. } => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
