use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{i18n::LocalizedTextDto, validate_not_blank};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusDto {
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusDto {
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateBookingDto {
    pub jyotirlinga_slug: String,
    pub darshan_type_id: i32,
    pub time_slot_id: i32,
    pub visit_date: NaiveDate,
    #[validate(range(min = 1))]
    pub number_of_persons: i32,
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub devotee_name: String,
    pub devotee_phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BookingDto {
    pub id: i32,
    pub receipt_number: String,
    pub jyotirlinga_slug: String,
    pub jyotirlinga_name: LocalizedTextDto,
    pub darshan_type_name: LocalizedTextDto,
    pub visit_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub number_of_persons: i32,
    pub devotee_name: String,
    pub devotee_phone: String,
    pub total_amount_paise: i64,
    pub status: BookingStatusDto,
    pub payment_status: PaymentStatusDto,
    pub payment_reference: Option<String>,
    pub created_at: NaiveDateTime,
    pub cancelled_at: Option<NaiveDateTime>,
}

/// Payment confirmation from the (placeholder) payment gateway
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ConfirmPaymentDto {
    #[validate(length(min = 4, max = 64))]
    pub reference: String,
}

/// Formats an amount in paise as rupees, e.g. `123456` → `1,234.56`.
pub fn format_rupees(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let paise = paise.unsigned_abs();
    let rupees = (paise / 100).to_string();

    // Indian digit grouping: last three digits, then groups of two
    let mut grouped = String::new();
    let digits: Vec<char> = rupees.chars().collect();
    let len = digits.len();
    for (i, digit) in digits.iter().enumerate() {
        grouped.push(*digit);
        let left = len - i - 1;
        if left == 3 || (left > 3 && (left - 3) % 2 == 0) {
            grouped.push(',');
        }
    }

    format!("{}{}.{:02}", sign, grouped, paise % 100)
}
