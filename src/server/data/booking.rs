use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::booking::{BookingStatus, PaymentStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Fields of a booking chosen by the devotee and priced by the booking service.
pub struct NewBooking {
    /// Unique `KD-YYYYMMDD-XXXXXX` reference shown to the devotee
    pub receipt_number: String,
    pub user_id: i32,
    pub jyotirlinga_id: i32,
    pub darshan_type_id: i32,
    pub time_slot_id: i32,
    pub visit_date: NaiveDate,
    pub number_of_persons: i32,
    /// Trimmed name of the lead devotee
    pub devotee_name: String,
    /// Phone in `+91XXXXXXXXXX` form
    pub devotee_phone: String,
    /// Darshan price times the number of persons
    pub total_amount_paise: i64,
}

/// Database access for bookings
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a confirmed booking awaiting payment
    pub async fn create(&self, booking: &NewBooking) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let booking = entity::booking::ActiveModel {
            receipt_number: ActiveValue::Set(booking.receipt_number.clone()),
            user_id: ActiveValue::Set(booking.user_id),
            jyotirlinga_id: ActiveValue::Set(booking.jyotirlinga_id),
            darshan_type_id: ActiveValue::Set(booking.darshan_type_id),
            time_slot_id: ActiveValue::Set(booking.time_slot_id),
            visit_date: ActiveValue::Set(booking.visit_date),
            number_of_persons: ActiveValue::Set(booking.number_of_persons),
            devotee_name: ActiveValue::Set(booking.devotee_name.clone()),
            devotee_phone: ActiveValue::Set(booking.devotee_phone.clone()),
            total_amount_paise: ActiveValue::Set(booking.total_amount_paise),
            status: ActiveValue::Set(BookingStatus::Confirmed),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_reference: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            cancelled_at: ActiveValue::Set(None),
            ..Default::default()
        };

        booking.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_receipt(
        &self,
        receipt_number: &str,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ReceiptNumber.eq(receipt_number))
            .one(self.db)
            .await
    }

    /// Lists a user's bookings, newest first
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists bookings filtered by visit date and status, newest first
    pub async fn list_filtered(
        &self,
        visit_date: Option<NaiveDate>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(visit_date) = visit_date {
            query = query.filter(entity::booking::Column::VisitDate.eq(visit_date));
        }
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Persons held by non-cancelled bookings of each slot on `visit_date`
    ///
    /// Slots without bookings are absent from the map.
    pub async fn booked_persons(
        &self,
        time_slot_ids: &[i32],
        visit_date: NaiveDate,
    ) -> Result<HashMap<i32, i64>, DbErr> {
        if time_slot_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i32)> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::TimeSlotId)
            .column(entity::booking::Column::NumberOfPersons)
            .filter(entity::booking::Column::TimeSlotId.is_in(time_slot_ids.iter().copied()))
            .filter(entity::booking::Column::VisitDate.eq(visit_date))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut booked = HashMap::new();
        for (slot_id, persons) in rows {
            *booked.entry(slot_id).or_insert(0) += persons as i64;
        }

        Ok(booked)
    }

    /// Cancels a booking, moving its payment to `payment_status`
    pub async fn cancel(
        &self,
        booking: entity::booking::Model,
        payment_status: PaymentStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let mut booking_am = booking.into_active_model();
        booking_am.status = ActiveValue::Set(BookingStatus::Cancelled);
        booking_am.payment_status = ActiveValue::Set(payment_status);
        booking_am.cancelled_at = ActiveValue::Set(Some(now));
        booking_am.updated_at = ActiveValue::Set(now);

        booking_am.update(self.db).await
    }

    pub async fn set_status(
        &self,
        booking: entity::booking::Model,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut booking_am = booking.into_active_model();
        booking_am.status = ActiveValue::Set(status);
        booking_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        booking_am.update(self.db).await
    }

    /// Marks the payment completed with the gateway reference
    pub async fn complete_payment(
        &self,
        booking: entity::booking::Model,
        reference: &str,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut booking_am = booking.into_active_model();
        booking_am.payment_status = ActiveValue::Set(PaymentStatus::Completed);
        booking_am.payment_reference = ActiveValue::Set(Some(reference.to_string()));
        booking_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        booking_am.update(self.db).await
    }

    /// Cancels confirmed bookings whose payment has been pending since before `cutoff`
    ///
    /// Returns the number of bookings cancelled.
    pub async fn cancel_unpaid_before(&self, cutoff: NaiveDateTime) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled),
            )
            .col_expr(
                entity::booking::Column::PaymentStatus,
                Expr::value(PaymentStatus::Failed),
            )
            .col_expr(entity::booking::Column::CancelledAt, Expr::value(now))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::PaymentStatus.eq(PaymentStatus::Pending))
            .filter(entity::booking::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Completes confirmed bookings whose visit date is before `today`
    ///
    /// Returns the number of bookings completed.
    pub async fn complete_visited_before(&self, today: NaiveDate) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed),
            )
            .col_expr(
                entity::booking::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::VisitDate.lt(today))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
