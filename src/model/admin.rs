//! Request and response bodies of the admin API.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::{
    booking::BookingStatusDto,
    i18n::LocalizedTextDto,
};

/// Highest darshan price accepted, 1 crore rupees.
pub const MAX_PRICE_PAISE: i64 = 1_000_000_000;

/// Slugs are lowercase ASCII words separated by single hyphens, e.g. `kashi-vishwanath`.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = !slug.is_empty()
        && slug.len() <= 64
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AdminLoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AdminTokenDto {
    pub token: String,
    pub username: String,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpsertCityDto {
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(nested)]
    pub name: LocalizedTextDto,
    #[validate(nested)]
    pub state: LocalizedTextDto,
    #[validate(nested)]
    pub description: LocalizedTextDto,
    #[validate(url)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpsertJyotirlingaDto {
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    pub city_id: i32,
    #[validate(nested)]
    pub name: LocalizedTextDto,
    #[validate(nested)]
    pub description: LocalizedTextDto,
    #[validate(nested)]
    pub significance: LocalizedTextDto,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpsertDarshanTypeDto {
    pub jyotirlinga_id: i32,
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
    #[validate(nested)]
    pub name: LocalizedTextDto,
    #[validate(nested)]
    pub description: LocalizedTextDto,
    #[validate(range(min = 0, max = MAX_PRICE_PAISE))]
    pub price_paise: i64,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: i32,
    #[validate(range(min = 1, max = 20))]
    pub max_persons_per_booking: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[validate(schema(function = "validate_slot_window"))]
pub struct UpsertTimeSlotDto {
    pub darshan_type_id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[validate(range(min = 1, max = 100000))]
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn validate_slot_window(slot: &UpsertTimeSlotDto) -> Result<(), ValidationError> {
    if slot.start_time < slot.end_time {
        Ok(())
    } else {
        Err(ValidationError::new("start_time_before_end_time"))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpsertQuoteDto {
    #[validate(nested)]
    pub text: LocalizedTextDto,
    #[validate(nested)]
    pub author: LocalizedTextDto,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
}

/// Filters for the admin booking list
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct BookingFilterDto {
    pub date: Option<NaiveDate>,
    pub status: Option<BookingStatusDto>,
}

/// Result of a media upload to the CDN
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MediaUploadDto {
    pub url: String,
    pub public_id: String,
    pub bytes: u64,
    pub format: String,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use validator::Validate;

    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        assert!(validate_slug("kashi-vishwanath").is_ok());
        assert!(validate_slug("somnath2").is_ok());
    }

    #[test]
    fn rejects_malformed_slugs() {
        for slug in ["", "Kashi", "-kashi", "kashi-", "kashi--vishwanath", "kashi vishwanath"] {
            assert!(validate_slug(slug).is_err(), "{slug:?} should be rejected");
        }
    }

    #[test]
    fn rejects_time_slot_ending_before_start() {
        let slot = UpsertTimeSlotDto {
            darshan_type_id: 1,
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            capacity: 50,
            is_active: true,
        };

        assert!(slot.validate().is_err());
    }

    #[test]
    fn caps_darshan_type_price() {
        let darshan_type = |price_paise| UpsertDarshanTypeDto {
            jyotirlinga_id: 1,
            slug: "special-darshan".to_string(),
            name: LocalizedTextDto {
                en: "Special Darshan".to_string(),
                hi: None,
            },
            description: LocalizedTextDto {
                en: "Quick entry".to_string(),
                hi: None,
            },
            price_paise,
            duration_minutes: 30,
            max_persons_per_booking: 5,
            is_active: true,
        };

        assert!(darshan_type(MAX_PRICE_PAISE).validate().is_ok());
        assert!(darshan_type(MAX_PRICE_PAISE + 1).validate().is_err());
        assert!(darshan_type(i64::MAX / 2 + 1).validate().is_err());
        assert!(darshan_type(-1).validate().is_err());
    }
}
