//! Database model type aliases.
//!
//! Shorthands for the `entity` crate models used throughout services and repositories.

/// Registered devotee, identified by a normalized phone number.
pub type UserModel = entity::app_user::Model;

/// Back office account, `admin` or `editor` role.
pub type AdminUserModel = entity::admin_user::Model;

pub type CityModel = entity::city::Model;

/// A Jyotirlinga temple.
pub type JyotirlingaModel = entity::jyotirlinga::Model;

pub type DarshanTypeModel = entity::darshan_type::Model;

/// Daily bookable window of a darshan type with a per-day capacity in persons.
pub type TimeSlotModel = entity::time_slot::Model;

pub type BookingModel = entity::booking::Model;

pub type QuoteModel = entity::quote::Model;

mod convert {
    use entity::{
        booking::{BookingStatus, PaymentStatus},
        localized::LocalizedText,
    };

    use super::*;
    use crate::model::{
        booking::{BookingStatusDto, PaymentStatusDto},
        content::{CityDto, DarshanTypeDto, JyotirlingaDto, QuoteDto, TimeSlotDto},
        i18n::{Language, LocalizedTextDto},
        user::UserDto,
    };

    impl From<LocalizedText> for LocalizedTextDto {
        fn from(text: LocalizedText) -> Self {
            Self {
                en: text.en,
                hi: text.hi,
            }
        }
    }

    impl From<LocalizedTextDto> for LocalizedText {
        fn from(text: LocalizedTextDto) -> Self {
            // Blank translations are stored as absent
            let hi = text.hi.filter(|hi| !hi.trim().is_empty());
            Self { en: text.en, hi }
        }
    }

    impl From<UserModel> for UserDto {
        fn from(user: UserModel) -> Self {
            Self {
                id: user.id,
                phone: user.phone,
                name: user.name,
                email: user.email,
                preferred_language: Language::from_code(&user.preferred_language),
            }
        }
    }

    impl From<CityModel> for CityDto {
        fn from(city: CityModel) -> Self {
            Self {
                id: city.id,
                slug: city.slug,
                name: city.name.into(),
                state: city.state.into(),
                description: city.description.into(),
                image_url: city.image_url,
            }
        }
    }

    impl From<JyotirlingaModel> for JyotirlingaDto {
        fn from(temple: JyotirlingaModel) -> Self {
            Self {
                id: temple.id,
                slug: temple.slug,
                city_id: temple.city_id,
                name: temple.name.into(),
                description: temple.description.into(),
                significance: temple.significance.into(),
                address: temple.address,
                image_url: temple.image_url,
                gallery: temple.gallery.0,
            }
        }
    }

    impl From<DarshanTypeModel> for DarshanTypeDto {
        fn from(darshan_type: DarshanTypeModel) -> Self {
            Self {
                id: darshan_type.id,
                jyotirlinga_id: darshan_type.jyotirlinga_id,
                slug: darshan_type.slug,
                name: darshan_type.name.into(),
                description: darshan_type.description.into(),
                price_paise: darshan_type.price_paise,
                duration_minutes: darshan_type.duration_minutes,
                max_persons_per_booking: darshan_type.max_persons_per_booking,
            }
        }
    }

    impl From<TimeSlotModel> for TimeSlotDto {
        fn from(slot: TimeSlotModel) -> Self {
            Self {
                id: slot.id,
                darshan_type_id: slot.darshan_type_id,
                start_time: slot.start_time,
                end_time: slot.end_time,
                capacity: slot.capacity,
                is_active: slot.is_active,
            }
        }
    }

    impl From<QuoteModel> for QuoteDto {
        fn from(quote: QuoteModel) -> Self {
            Self {
                id: quote.id,
                text: quote.text.into(),
                author: quote.author.into(),
            }
        }
    }

    impl From<BookingStatus> for BookingStatusDto {
        fn from(status: BookingStatus) -> Self {
            match status {
                BookingStatus::Confirmed => Self::Confirmed,
                BookingStatus::Cancelled => Self::Cancelled,
                BookingStatus::Completed => Self::Completed,
            }
        }
    }

    impl From<BookingStatusDto> for BookingStatus {
        fn from(status: BookingStatusDto) -> Self {
            match status {
                BookingStatusDto::Confirmed => Self::Confirmed,
                BookingStatusDto::Cancelled => Self::Cancelled,
                BookingStatusDto::Completed => Self::Completed,
            }
        }
    }

    impl From<PaymentStatus> for PaymentStatusDto {
        fn from(status: PaymentStatus) -> Self {
            match status {
                PaymentStatus::Pending => Self::Pending,
                PaymentStatus::Completed => Self::Completed,
                PaymentStatus::Failed => Self::Failed,
                PaymentStatus::Refunded => Self::Refunded,
            }
        }
    }
}
