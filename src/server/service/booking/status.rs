//! Booking and payment status machines.
//!
//! Bookings move `confirmed → cancelled | completed` and stay put afterwards. Payments move
//! `pending → completed | failed`, `failed → completed` and `completed → refunded`.

use entity::booking::{BookingStatus, PaymentStatus};
use sea_orm::ActiveEnum;

use crate::server::error::booking::BookingError;

/// Checks that a booking may move from `from` to `to`
pub fn check_booking_transition(from: BookingStatus, to: BookingStatus) -> Result<(), BookingError> {
    match (from, to) {
        (BookingStatus::Confirmed, BookingStatus::Cancelled)
        | (BookingStatus::Confirmed, BookingStatus::Completed) => Ok(()),
        _ => Err(BookingError::InvalidTransition {
            what: "booking",
            from: from.to_value(),
            to: to.to_value(),
        }),
    }
}

/// Checks that a payment may move from `from` to `to`
pub fn check_payment_transition(from: PaymentStatus, to: PaymentStatus) -> Result<(), BookingError> {
    match (from, to) {
        (PaymentStatus::Pending, PaymentStatus::Completed)
        | (PaymentStatus::Pending, PaymentStatus::Failed)
        | (PaymentStatus::Failed, PaymentStatus::Completed)
        | (PaymentStatus::Completed, PaymentStatus::Refunded) => Ok(()),
        _ => Err(BookingError::InvalidTransition {
            what: "payment",
            from: from.to_value(),
            to: to.to_value(),
        }),
    }
}

/// Payment status a booking ends up with once cancelled
pub fn payment_after_cancellation(payment: PaymentStatus) -> PaymentStatus {
    match payment {
        PaymentStatus::Completed => PaymentStatus::Refunded,
        PaymentStatus::Pending => PaymentStatus::Failed,
        other => other,
    }
}
