//! Content management for the admin API.
//!
//! Creates and updates are open to editors, deletes are checked for the `admin` role by the
//! controllers before reaching this service.

use sea_orm::{DatabaseConnection, DbErr, DeleteResult, SqlErr};

use crate::{
    model::{
        admin::{
            UpsertCityDto, UpsertDarshanTypeDto, UpsertJyotirlingaDto, UpsertQuoteDto,
            UpsertTimeSlotDto,
        },
        content::{CityDto, DarshanTypeDto, JyotirlingaDto, QuoteDto, TimeSlotDto},
    },
    server::{
        data::content::{
            city::CityRepository, darshan_type::DarshanTypeRepository,
            jyotirlinga::JyotirlingaRepository, quote::QuoteRepository,
            time_slot::TimeSlotRepository,
        },
        error::{content::ContentError, Error},
    },
};

/// Write side of the temple content managed from the admin panel
pub struct ContentAdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentAdminService<'a> {
    /// Creates a new instance of [`ContentAdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a city, its slug must be unused
    pub async fn create_city(&self, city: UpsertCityDto) -> Result<CityDto, Error> {
        let slug = city.slug.clone();
        let city = CityRepository::new(self.db)
            .create(city)
            .await
            .map_err(|e| write_error(e, &slug))?;

        Ok(city.into())
    }

    /// Replaces a city's fields
    pub async fn update_city(&self, id: i32, city: UpsertCityDto) -> Result<CityDto, Error> {
        let slug = city.slug.clone();
        CityRepository::new(self.db)
            .update(id, city)
            .await
            .map_err(|e| write_error(e, &slug))?
            .map(CityDto::from)
            .ok_or_else(|| ContentError::not_found("City", id).into())
    }

    /// Deletes a city without temples
    pub async fn delete_city(&self, id: i32) -> Result<(), Error> {
        let result = CityRepository::new(self.db).delete(id).await;

        delete_outcome(result, "City", id)
    }

    /// Creates a temple under an existing city
    pub async fn create_jyotirlinga(
        &self,
        temple: UpsertJyotirlingaDto,
    ) -> Result<JyotirlingaDto, Error> {
        self.ensure_city(temple.city_id).await?;

        let slug = temple.slug.clone();
        let temple = JyotirlingaRepository::new(self.db)
            .create(temple)
            .await
            .map_err(|e| write_error(e, &slug))?;

        Ok(temple.into())
    }

    /// Replaces a temple's fields
    pub async fn update_jyotirlinga(
        &self,
        id: i32,
        temple: UpsertJyotirlingaDto,
    ) -> Result<JyotirlingaDto, Error> {
        self.ensure_city(temple.city_id).await?;

        let slug = temple.slug.clone();
        JyotirlingaRepository::new(self.db)
            .update(id, temple)
            .await
            .map_err(|e| write_error(e, &slug))?
            .map(JyotirlingaDto::from)
            .ok_or_else(|| ContentError::not_found("Jyotirlinga", id).into())
    }

    /// Deletes a temple without darshan types
    pub async fn delete_jyotirlinga(&self, id: i32) -> Result<(), Error> {
        let result = JyotirlingaRepository::new(self.db).delete(id).await;

        delete_outcome(result, "Jyotirlinga", id)
    }

    /// Creates a darshan type under an existing temple
    pub async fn create_darshan_type(
        &self,
        darshan_type: UpsertDarshanTypeDto,
    ) -> Result<DarshanTypeDto, Error> {
        self.ensure_jyotirlinga(darshan_type.jyotirlinga_id).await?;

        let slug = darshan_type.slug.clone();
        let darshan_type = DarshanTypeRepository::new(self.db)
            .create(darshan_type)
            .await
            .map_err(|e| write_error(e, &slug))?;

        Ok(darshan_type.into())
    }

    /// Replaces a darshan type's fields
    pub async fn update_darshan_type(
        &self,
        id: i32,
        darshan_type: UpsertDarshanTypeDto,
    ) -> Result<DarshanTypeDto, Error> {
        self.ensure_jyotirlinga(darshan_type.jyotirlinga_id).await?;

        let slug = darshan_type.slug.clone();
        DarshanTypeRepository::new(self.db)
            .update(id, darshan_type)
            .await
            .map_err(|e| write_error(e, &slug))?
            .map(DarshanTypeDto::from)
            .ok_or_else(|| ContentError::not_found("Darshan type", id).into())
    }

    /// Deletes a darshan type without time slots
    pub async fn delete_darshan_type(&self, id: i32) -> Result<(), Error> {
        let result = DarshanTypeRepository::new(self.db).delete(id).await;

        delete_outcome(result, "Darshan type", id)
    }

    /// Creates a time slot under an existing darshan type
    pub async fn create_time_slot(&self, slot: UpsertTimeSlotDto) -> Result<TimeSlotDto, Error> {
        self.ensure_darshan_type(slot.darshan_type_id).await?;

        let slot = TimeSlotRepository::new(self.db).create(slot).await?;

        Ok(slot.into())
    }

    /// Replaces a time slot's fields
    pub async fn update_time_slot(
        &self,
        id: i32,
        slot: UpsertTimeSlotDto,
    ) -> Result<TimeSlotDto, Error> {
        self.ensure_darshan_type(slot.darshan_type_id).await?;

        TimeSlotRepository::new(self.db)
            .update(id, slot)
            .await?
            .map(TimeSlotDto::from)
            .ok_or_else(|| ContentError::not_found("Time slot", id).into())
    }

    /// Deletes a time slot no booking references
    pub async fn delete_time_slot(&self, id: i32) -> Result<(), Error> {
        let result = TimeSlotRepository::new(self.db).delete(id).await;

        delete_outcome(result, "Time slot", id)
    }

    pub async fn create_quote(&self, quote: UpsertQuoteDto) -> Result<QuoteDto, Error> {
        let quote = QuoteRepository::new(self.db).create(quote).await?;

        Ok(quote.into())
    }

    pub async fn update_quote(&self, id: i32, quote: UpsertQuoteDto) -> Result<QuoteDto, Error> {
        QuoteRepository::new(self.db)
            .update(id, quote)
            .await?
            .map(QuoteDto::from)
            .ok_or_else(|| ContentError::not_found("Quote", id).into())
    }

    pub async fn delete_quote(&self, id: i32) -> Result<(), Error> {
        let result = QuoteRepository::new(self.db).delete(id).await;

        delete_outcome(result, "Quote", id)
    }

    async fn ensure_city(&self, id: i32) -> Result<(), Error> {
        match CityRepository::new(self.db).get(id).await? {
            Some(_) => Ok(()),
            None => Err(ContentError::MissingParent { kind: "city", id }.into()),
        }
    }

    async fn ensure_jyotirlinga(&self, id: i32) -> Result<(), Error> {
        match JyotirlingaRepository::new(self.db).get(id).await? {
            Some(_) => Ok(()),
            None => Err(ContentError::MissingParent {
                kind: "jyotirlinga",
                id,
            }
            .into()),
        }
    }

    async fn ensure_darshan_type(&self, id: i32) -> Result<(), Error> {
        match DarshanTypeRepository::new(self.db).get(id).await? {
            Some(_) => Ok(()),
            None => Err(ContentError::MissingParent {
                kind: "darshan type",
                id,
            }
            .into()),
        }
    }
}

/// Maps a unique violation on insert or update to a slug conflict
fn write_error(err: DbErr, slug: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ContentError::SlugTaken(slug.to_string()).into(),
        _ => err.into(),
    }
}

/// Maps a delete result, a foreign key violation means bookings still reference the row
fn delete_outcome(
    result: Result<DeleteResult, DbErr>,
    kind: &'static str,
    id: i32,
) -> Result<(), Error> {
    match result {
        Ok(result) if result.rows_affected == 0 => Err(ContentError::not_found(kind, id).into()),
        Ok(_) => Ok(()),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
            Err(ContentError::InUse(kind).into())
        }
        Err(err) => Err(err.into()),
    }
}
