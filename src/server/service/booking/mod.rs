//! Booking lifecycle: creation against slot capacity, cancellation, payment confirmation and
//! the admin status override.

pub mod receipt;
pub mod receipt_number;
pub mod status;

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use dioxus_logger::tracing;
use entity::booking::{BookingStatus, PaymentStatus};
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::{
        admin::BookingFilterDto,
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        data::{
            booking::{BookingRepository, NewBooking},
            content::{
                darshan_type::DarshanTypeRepository, jyotirlinga::JyotirlingaRepository,
                time_slot::TimeSlotRepository,
            },
        },
        error::{booking::BookingError, content::ContentError, Error},
        model::db::BookingModel,
        service::booking::{
            receipt::render_receipt, receipt_number::generate_receipt_number,
            status::{check_booking_transition, check_payment_transition, payment_after_cancellation},
        },
        util::{
            phone::normalize_phone,
            time::{ist_today, last_bookable_date},
        },
    },
};

/// Attempts at drawing a receipt number that is not taken yet.
pub const RECEIPT_NUMBER_ATTEMPTS: usize = 5;

/// Booking lifecycle operations over one database connection
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a darshan for `user_id`
    ///
    /// The capacity check and the insert share one transaction holding the slot row lock, so
    /// concurrent bookings of the same slot cannot oversell it.
    pub async fn create(&self, user_id: i32, request: CreateBookingDto) -> Result<BookingDto, Error> {
        self.create_with(user_id, request, generate_receipt_number)
            .await
    }

    /// Books a darshan, drawing receipt numbers from `next_receipt_number`
    ///
    /// A drawn number that is already taken is discarded and another one is drawn, up to
    /// [`RECEIPT_NUMBER_ATTEMPTS`] times.
    pub async fn create_with(
        &self,
        user_id: i32,
        request: CreateBookingDto,
        mut next_receipt_number: impl FnMut(NaiveDate) -> String + Send,
    ) -> Result<BookingDto, Error> {
        let devotee_phone = normalize_phone(&request.devotee_phone)?;

        let today = ist_today()?;
        check_visit_date(request.visit_date, today)?;

        let temple = match JyotirlingaRepository::new(self.db)
            .get_by_slug(&request.jyotirlinga_slug)
            .await?
        {
            Some((temple, _)) => temple,
            None => {
                return Err(ContentError::not_found("Jyotirlinga", &request.jyotirlinga_slug).into())
            }
        };
        if !temple.is_active {
            return Err(BookingError::Inactive("This temple").into());
        }

        let darshan_type = DarshanTypeRepository::new(self.db)
            .get(request.darshan_type_id)
            .await?
            .ok_or_else(|| ContentError::not_found("Darshan type", request.darshan_type_id))?;
        if darshan_type.jyotirlinga_id != temple.id {
            return Err(BookingError::Mismatch(
                "Darshan type does not belong to this temple".to_string(),
            )
            .into());
        }
        if !darshan_type.is_active {
            return Err(BookingError::Inactive("This darshan type").into());
        }

        if request.number_of_persons < 1
            || request.number_of_persons > darshan_type.max_persons_per_booking
        {
            return Err(BookingError::InvalidPartySize {
                max: darshan_type.max_persons_per_booking,
            }
            .into());
        }

        let total_amount_paise = darshan_type
            .price_paise
            .checked_mul(request.number_of_persons as i64)
            .ok_or(BookingError::AmountOverflow)?;

        let txn = self.db.begin().await?;

        let slot = TimeSlotRepository::new(&txn)
            .get_for_update(request.time_slot_id)
            .await?
            .ok_or_else(|| ContentError::not_found("Time slot", request.time_slot_id))?;
        if slot.darshan_type_id != darshan_type.id {
            return Err(BookingError::Mismatch(
                "Time slot does not belong to this darshan type".to_string(),
            )
            .into());
        }
        if !slot.is_active {
            return Err(BookingError::Inactive("This time slot").into());
        }

        let booked = BookingRepository::new(&txn)
            .booked_persons(&[slot.id], request.visit_date)
            .await?
            .get(&slot.id)
            .copied()
            .unwrap_or(0) as i32;
        let available = (slot.capacity - booked).max(0);
        if request.number_of_persons > available {
            return Err(BookingError::InsufficientCapacity {
                available,
                requested: request.number_of_persons,
            }
            .into());
        }

        let mut new_booking = NewBooking {
            receipt_number: String::new(),
            user_id,
            jyotirlinga_id: temple.id,
            darshan_type_id: darshan_type.id,
            time_slot_id: slot.id,
            visit_date: request.visit_date,
            number_of_persons: request.number_of_persons,
            devotee_name: request.devotee_name.trim().to_string(),
            devotee_phone,
            total_amount_paise,
        };

        let mut created = None;
        for _ in 0..RECEIPT_NUMBER_ATTEMPTS {
            new_booking.receipt_number = next_receipt_number(request.visit_date);

            // A failed insert poisons a postgres transaction, retry inside a savepoint
            let savepoint = txn.begin().await?;
            match BookingRepository::new(&savepoint).create(&new_booking).await {
                Ok(booking) => {
                    savepoint.commit().await?;
                    created = Some(booking);
                    break;
                }
                Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    savepoint.rollback().await?;
                    tracing::warn!(
                        "Receipt number {} collided, drawing another",
                        new_booking.receipt_number
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        let booking = created.ok_or(BookingError::ReceiptNumberExhausted(RECEIPT_NUMBER_ATTEMPTS))?;
        txn.commit().await?;

        tracing::info!(
            "Booking {} created for user {} ({} persons on {})",
            booking.receipt_number,
            user_id,
            booking.number_of_persons,
            booking.visit_date
        );

        self.to_dto(booking).await
    }

    /// Lists a user's bookings, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<BookingDto>, Error> {
        let bookings = BookingRepository::new(self.db).list_by_user(user_id).await?;

        self.to_dtos(bookings).await
    }

    /// Gets a booking owned by `user_id`
    ///
    /// Bookings of other users are reported as missing.
    pub async fn get_for_user(&self, user_id: i32, receipt_number: &str) -> Result<BookingDto, Error> {
        let booking = self.find_owned(user_id, receipt_number).await?;

        self.to_dto(booking).await
    }

    /// Renders the PDF receipt of a booking owned by `user_id`
    pub async fn receipt_pdf(
        &self,
        user_id: i32,
        receipt_number: &str,
    ) -> Result<(BookingDto, Vec<u8>), Error> {
        let booking = self.get_for_user(user_id, receipt_number).await?;
        let pdf = render_receipt(&booking)?;

        Ok((booking, pdf))
    }

    /// Cancels an upcoming confirmed booking of `user_id`
    pub async fn cancel(&self, user_id: i32, receipt_number: &str) -> Result<BookingDto, Error> {
        let booking = self.find_owned(user_id, receipt_number).await?;

        check_booking_transition(booking.status, BookingStatus::Cancelled)?;
        if booking.visit_date < ist_today()? {
            return Err(BookingError::InvalidTransition {
                what: "booking",
                from: "confirmed (visit date passed)".to_string(),
                to: "cancelled".to_string(),
            }
            .into());
        }

        let booking = self.cancel_booking(booking).await?;

        self.to_dto(booking).await
    }

    /// Records a payment from the gateway for a confirmed booking of `user_id`
    pub async fn confirm_payment(
        &self,
        user_id: i32,
        receipt_number: &str,
        reference: &str,
    ) -> Result<BookingDto, Error> {
        let booking = self.find_owned(user_id, receipt_number).await?;

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidTransition {
                what: "payment",
                from: format!("{} booking", sea_orm::ActiveEnum::to_value(&booking.status)),
                to: "completed".to_string(),
            }
            .into());
        }
        check_payment_transition(booking.payment_status, PaymentStatus::Completed)?;

        let booking = BookingRepository::new(self.db)
            .complete_payment(booking, reference.trim())
            .await?;

        tracing::info!("Payment recorded for booking {}", booking.receipt_number);

        self.to_dto(booking).await
    }

    /// Lists bookings for the admin API, newest first
    pub async fn admin_list(&self, filter: BookingFilterDto) -> Result<Vec<BookingDto>, Error> {
        let bookings = BookingRepository::new(self.db)
            .list_filtered(filter.date, filter.status.map(BookingStatus::from))
            .await?;

        self.to_dtos(bookings).await
    }

    /// Moves a booking to `status` following the booking status machine
    pub async fn admin_set_status(&self, id: i32, status: BookingStatus) -> Result<BookingDto, Error> {
        let booking = BookingRepository::new(self.db)
            .get(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        check_booking_transition(booking.status, status)?;

        let booking = match status {
            BookingStatus::Cancelled => self.cancel_booking(booking).await?,
            status => {
                BookingRepository::new(self.db)
                    .set_status(booking, status)
                    .await?
            }
        };

        self.to_dto(booking).await
    }

    /// Cancels confirmed bookings whose payment has been pending since before `cutoff`
    pub async fn expire_unpaid(&self, cutoff: NaiveDateTime) -> Result<u64, Error> {
        Ok(BookingRepository::new(self.db)
            .cancel_unpaid_before(cutoff)
            .await?)
    }

    /// Completes confirmed bookings whose visit date is before `today`
    pub async fn complete_past_visits(&self, today: NaiveDate) -> Result<u64, Error> {
        Ok(BookingRepository::new(self.db)
            .complete_visited_before(today)
            .await?)
    }

    async fn cancel_booking(&self, booking: BookingModel) -> Result<BookingModel, Error> {
        let payment_status = payment_after_cancellation(booking.payment_status);
        let booking = BookingRepository::new(self.db)
            .cancel(booking, payment_status)
            .await?;

        tracing::info!("Booking {} cancelled", booking.receipt_number);

        Ok(booking)
    }

    async fn find_owned(&self, user_id: i32, receipt_number: &str) -> Result<BookingModel, Error> {
        match BookingRepository::new(self.db)
            .get_by_receipt(receipt_number)
            .await?
        {
            Some(booking) if booking.user_id == user_id => Ok(booking),
            _ => Err(BookingError::NotFound(receipt_number.to_string()).into()),
        }
    }

    async fn to_dto(&self, booking: BookingModel) -> Result<BookingDto, Error> {
        self.to_dtos(vec![booking])
            .await?
            .pop()
            .ok_or_else(|| Error::InternalError("Booking vanished while building response".to_string()))
    }

    /// Joins bookings with their temple, darshan type and slot
    async fn to_dtos(&self, bookings: Vec<BookingModel>) -> Result<Vec<BookingDto>, Error> {
        let temple_ids = unique_ids(bookings.iter().map(|b| b.jyotirlinga_id));
        let darshan_type_ids = unique_ids(bookings.iter().map(|b| b.darshan_type_id));
        let slot_ids = unique_ids(bookings.iter().map(|b| b.time_slot_id));

        let temples: HashMap<_, _> = JyotirlingaRepository::new(self.db)
            .get_many(&temple_ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let darshan_types: HashMap<_, _> = DarshanTypeRepository::new(self.db)
            .get_many(&darshan_type_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let slots: HashMap<_, _> = TimeSlotRepository::new(self.db)
            .get_many(&slot_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let (Some(temple), Some(darshan_type), Some(slot)) = (
                    temples.get(&booking.jyotirlinga_id),
                    darshan_types.get(&booking.darshan_type_id),
                    slots.get(&booking.time_slot_id),
                ) else {
                    return Err(Error::InternalError(format!(
                        "Booking {} references missing content",
                        booking.receipt_number
                    )));
                };

                Ok(BookingDto {
                    id: booking.id,
                    receipt_number: booking.receipt_number,
                    jyotirlinga_slug: temple.slug.clone(),
                    jyotirlinga_name: temple.name.clone().into(),
                    darshan_type_name: darshan_type.name.clone().into(),
                    visit_date: booking.visit_date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    number_of_persons: booking.number_of_persons,
                    devotee_name: booking.devotee_name,
                    devotee_phone: booking.devotee_phone,
                    total_amount_paise: booking.total_amount_paise,
                    status: booking.status.into(),
                    payment_status: booking.payment_status.into(),
                    payment_reference: booking.payment_reference,
                    created_at: booking.created_at,
                    cancelled_at: booking.cancelled_at,
                })
            })
            .collect()
    }
}

/// Rejects visit dates before `today` or more than the booking window ahead
pub fn check_visit_date(visit_date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
    if visit_date < today {
        return Err(BookingError::InvalidVisitDate {
            date: visit_date.to_string(),
            reason: "date is in the past",
        });
    }
    if visit_date > last_bookable_date(today) {
        return Err(BookingError::InvalidVisitDate {
            date: visit_date.to_string(),
            reason: "bookings open 60 days in advance",
        });
    }

    Ok(())
}

fn unique_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
