use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::booking::{self, BookingStatus, PaymentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

use crate::{
    fixtures::{booking::BookingFixtures, content::MockTemple},
    TestError,
};

impl<'a> BookingFixtures<'a> {
    /// Insert a confirmed booking with a pending payment, created now.
    pub async fn insert_mock_booking(
        &self,
        user_id: i32,
        temple: &MockTemple,
        visit_date: NaiveDate,
        number_of_persons: i32,
    ) -> Result<booking::Model, TestError> {
        self.insert_mock_booking_with(
            user_id,
            temple,
            visit_date,
            number_of_persons,
            BookingStatus::Confirmed,
            PaymentStatus::Pending,
            Utc::now().naive_utc(),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_mock_booking_with(
        &self,
        user_id: i32,
        temple: &MockTemple,
        visit_date: NaiveDate,
        number_of_persons: i32,
        status: BookingStatus,
        payment_status: PaymentStatus,
        created_at: NaiveDateTime,
    ) -> Result<booking::Model, TestError> {
        let existing = entity::prelude::Booking::find()
            .count(&self.setup.db)
            .await?;
        let receipt_number = format!("KD-{}-TEST{:02}", visit_date.format("%Y%m%d"), existing + 1);

        Ok(booking::ActiveModel {
            receipt_number: ActiveValue::Set(receipt_number),
            user_id: ActiveValue::Set(user_id),
            jyotirlinga_id: ActiveValue::Set(temple.jyotirlinga.id),
            darshan_type_id: ActiveValue::Set(temple.darshan_type.id),
            time_slot_id: ActiveValue::Set(temple.time_slot.id),
            visit_date: ActiveValue::Set(visit_date),
            number_of_persons: ActiveValue::Set(number_of_persons),
            devotee_name: ActiveValue::Set("Test Devotee".to_string()),
            devotee_phone: ActiveValue::Set("+919876543210".to_string()),
            total_amount_paise: ActiveValue::Set(
                temple.darshan_type.price_paise * number_of_persons as i64,
            ),
            status: ActiveValue::Set(status),
            payment_status: ActiveValue::Set(payment_status),
            payment_reference: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
            cancelled_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
