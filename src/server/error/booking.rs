use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking {0:?} not found")]
    NotFound(String),
    #[error("Visit date {date} is outside the bookable window ({reason})")]
    InvalidVisitDate { date: String, reason: &'static str },
    #[error("Number of persons must be between 1 and {max}")]
    InvalidPartySize { max: i32 },
    #[error("{0}")]
    Mismatch(String),
    #[error("Booking total exceeds the supported amount")]
    AmountOverflow,
    #[error("{0} is not currently open for booking")]
    Inactive(&'static str),
    #[error("Only {available} place(s) left in this slot, {requested} requested")]
    InsufficientCapacity { available: i32, requested: i32 },
    #[error("Cannot change {what} from {from} to {to}")]
    InvalidTransition {
        what: &'static str,
        from: String,
        to: String,
    },
    #[error("Failed to generate a unique receipt number after {0} attempts")]
    ReceiptNumberExhausted(usize),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::NOT_FOUND, "Booking not found")
            }
            Self::InvalidVisitDate { .. }
            | Self::InvalidPartySize { .. }
            | Self::Mismatch(_)
            | Self::Inactive(_)
            | Self::AmountOverflow => error_response(StatusCode::BAD_REQUEST, self.to_string()),
            Self::InsufficientCapacity { .. } | Self::InvalidTransition { .. } => {
                error_response(StatusCode::CONFLICT, self.to_string())
            }
            Self::ReceiptNumberExhausted(_) => InternalServerError(self).into_response(),
        }
    }
}
