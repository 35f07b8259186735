//! Scheduled booking maintenance.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    scheduler::config::booking::expire_unpaid::PAYMENT_TIMEOUT,
    service::booking::BookingService,
    util::time::ist_today,
};

/// Cancels bookings that were not paid within [`PAYMENT_TIMEOUT`], releasing their places
pub async fn expire_unpaid_bookings(db: DatabaseConnection) -> Result<u64, Error> {
    let cutoff = (Utc::now() - PAYMENT_TIMEOUT).naive_utc();

    BookingService::new(&db).expire_unpaid(cutoff).await
}

/// Marks confirmed bookings of past visit dates as completed
pub async fn complete_past_visits(db: DatabaseConnection) -> Result<u64, Error> {
    let today = ist_today()?;

    BookingService::new(&db).complete_past_visits(today).await
}
