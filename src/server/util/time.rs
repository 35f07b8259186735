//! Calendar helpers anchored to India Standard Time.
//!
//! Visit dates are calendar dates at the temple, so "today" is always computed in IST
//! (UTC+05:30) regardless of where the server runs.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use crate::server::error::Error;

/// Offset of India Standard Time from UTC in seconds.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Number of days ahead of today a visit may be booked.
pub const BOOKING_WINDOW_DAYS: i64 = 60;

fn ist() -> Result<FixedOffset, Error> {
    FixedOffset::east_opt(IST_OFFSET_SECS)
        .ok_or_else(|| Error::InternalError("Invalid IST offset".to_string()))
}

/// Calendar date in IST at the instant `now`.
pub fn ist_date(now: DateTime<Utc>) -> Result<NaiveDate, Error> {
    Ok(now.with_timezone(&ist()?).date_naive())
}

/// Today's calendar date in IST.
pub fn ist_today() -> Result<NaiveDate, Error> {
    ist_date(Utc::now())
}

/// Last visit date that can be booked when today is `today`.
pub fn last_bookable_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(BOOKING_WINDOW_DAYS)
}
