//! In-memory entity models with standard test values, for unit tests that never touch the
//! database.

use chrono::{NaiveDate, NaiveTime, Utc};
use entity::{
    booking::{self, BookingStatus, PaymentStatus},
    darshan_type, jyotirlinga,
    localized::{LocalizedText, MediaGallery},
    time_slot,
};

pub fn localized(en: &str, hi: Option<&str>) -> LocalizedText {
    LocalizedText::new(en, hi.map(str::to_string))
}

pub fn mock_jyotirlinga_model(id: i32, city_id: i32, slug: &str) -> jyotirlinga::Model {
    let now = Utc::now().naive_utc();
    jyotirlinga::Model {
        id,
        slug: slug.to_string(),
        city_id,
        name: localized("Kashi Vishwanath", Some("काशी विश्वनाथ")),
        description: localized("Temple of Lord Shiva on the western bank of the Ganga.", None),
        significance: localized("One of the twelve Jyotirlingas.", None),
        address: "Lahori Tola, Varanasi, Uttar Pradesh 221001".to_string(),
        image_url: None,
        gallery: MediaGallery::default(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_darshan_type_model(id: i32, jyotirlinga_id: i32, slug: &str) -> darshan_type::Model {
    darshan_type::Model {
        id,
        jyotirlinga_id,
        slug: slug.to_string(),
        name: localized("Sugam Darshan", Some("सुगम दर्शन")),
        description: localized("Priority queue entry.", None),
        price_paise: 30_000,
        duration_minutes: 45,
        max_persons_per_booking: 5,
        is_active: true,
    }
}

pub fn mock_time_slot_model(id: i32, darshan_type_id: i32, capacity: i32) -> time_slot::Model {
    time_slot::Model {
        id,
        darshan_type_id,
        start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        capacity,
        is_active: true,
    }
}

pub fn mock_booking_model(id: i32, receipt_number: &str, visit_date: NaiveDate) -> booking::Model {
    let now = Utc::now().naive_utc();
    booking::Model {
        id,
        receipt_number: receipt_number.to_string(),
        user_id: 1,
        jyotirlinga_id: 1,
        darshan_type_id: 1,
        time_slot_id: 1,
        visit_date,
        number_of_persons: 2,
        devotee_name: "Test Devotee".to_string(),
        devotee_phone: "+919876543210".to_string(),
        total_amount_paise: 60_000,
        status: BookingStatus::Confirmed,
        payment_status: PaymentStatus::Pending,
        payment_reference: None,
        created_at: now,
        updated_at: now,
        cancelled_at: None,
    }
}
