use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::i18n::LocalizedTextDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CityDto {
    pub id: i32,
    pub slug: String,
    pub name: LocalizedTextDto,
    pub state: LocalizedTextDto,
    pub description: LocalizedTextDto,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JyotirlingaDto {
    pub id: i32,
    pub slug: String,
    pub city_id: i32,
    pub name: LocalizedTextDto,
    pub description: LocalizedTextDto,
    pub significance: LocalizedTextDto,
    pub address: String,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
}

/// Temple page payload: the temple, its city, and the darshan types that can be booked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JyotirlingaDetailDto {
    pub jyotirlinga: JyotirlingaDto,
    pub city: CityDto,
    pub darshan_types: Vec<DarshanTypeDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DarshanTypeDto {
    pub id: i32,
    pub jyotirlinga_id: i32,
    pub slug: String,
    pub name: LocalizedTextDto,
    pub description: LocalizedTextDto,
    /// Price per person in paise
    pub price_paise: i64,
    pub duration_minutes: i32,
    pub max_persons_per_booking: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TimeSlotDto {
    pub id: i32,
    pub darshan_type_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
    pub is_active: bool,
}

/// Booking availability of a single time slot on a given date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotAvailabilityDto {
    pub time_slot_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
    pub booked: i32,
    pub available: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QuoteDto {
    pub id: i32,
    pub text: LocalizedTextDto,
    pub author: LocalizedTextDto,
}
