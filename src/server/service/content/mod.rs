//! Public content browsing.

pub mod admin;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{
        CityDto, DarshanTypeDto, JyotirlingaDetailDto, JyotirlingaDto, QuoteDto,
        SlotAvailabilityDto,
    },
    server::{
        data::{
            booking::BookingRepository,
            content::{
                city::CityRepository, darshan_type::DarshanTypeRepository,
                jyotirlinga::JyotirlingaRepository, quote::QuoteRepository,
                time_slot::TimeSlotRepository,
            },
        },
        error::{content::ContentError, Error},
        model::db::{CityModel, JyotirlingaModel},
    },
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    /// Creates a new instance of [`ContentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_cities(&self) -> Result<Vec<CityDto>, Error> {
        let cities = CityRepository::new(self.db).list().await?;

        Ok(cities.into_iter().map(CityDto::from).collect())
    }

    pub async fn get_city(&self, slug: &str) -> Result<CityDto, Error> {
        CityRepository::new(self.db)
            .get_by_slug(slug)
            .await?
            .map(CityDto::from)
            .ok_or_else(|| ContentError::not_found("City", slug).into())
    }

    /// Lists active temples, restricted to a city when `city_slug` is given
    pub async fn list_jyotirlingas(
        &self,
        city_slug: Option<&str>,
    ) -> Result<Vec<JyotirlingaDto>, Error> {
        let city_id = match city_slug {
            Some(slug) => Some(
                CityRepository::new(self.db)
                    .get_by_slug(slug)
                    .await?
                    .ok_or_else(|| ContentError::not_found("City", slug))?
                    .id,
            ),
            None => None,
        };

        let temples = JyotirlingaRepository::new(self.db)
            .list_active(city_id)
            .await?;

        Ok(temples.into_iter().map(JyotirlingaDto::from).collect())
    }

    /// Temple page: the temple, its city and its active darshan types
    pub async fn get_jyotirlinga(&self, slug: &str) -> Result<JyotirlingaDetailDto, Error> {
        let (temple, city) = self.find_active_temple(slug).await?;

        let darshan_types = DarshanTypeRepository::new(self.db)
            .list_active_by_jyotirlinga(temple.id)
            .await?;

        Ok(JyotirlingaDetailDto {
            jyotirlinga: temple.into(),
            city: city.into(),
            darshan_types: darshan_types.into_iter().map(DarshanTypeDto::from).collect(),
        })
    }

    pub async fn list_darshan_types(&self, slug: &str) -> Result<Vec<DarshanTypeDto>, Error> {
        let (temple, _) = self.find_active_temple(slug).await?;

        let darshan_types = DarshanTypeRepository::new(self.db)
            .list_active_by_jyotirlinga(temple.id)
            .await?;

        Ok(darshan_types.into_iter().map(DarshanTypeDto::from).collect())
    }

    /// Remaining capacity of each active slot of a darshan type on `date`
    pub async fn slot_availability(
        &self,
        darshan_type_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<SlotAvailabilityDto>, Error> {
        match DarshanTypeRepository::new(self.db).get(darshan_type_id).await? {
            Some(darshan_type) if darshan_type.is_active => {}
            _ => return Err(ContentError::not_found("Darshan type", darshan_type_id).into()),
        }

        let slots = TimeSlotRepository::new(self.db)
            .list_active_by_darshan_type(darshan_type_id)
            .await?;
        let slot_ids: Vec<i32> = slots.iter().map(|slot| slot.id).collect();
        let booked = BookingRepository::new(self.db)
            .booked_persons(&slot_ids, date)
            .await?;

        Ok(slots
            .into_iter()
            .map(|slot| {
                let booked = booked.get(&slot.id).copied().unwrap_or(0) as i32;
                SlotAvailabilityDto {
                    time_slot_id: slot.id,
                    date,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    capacity: slot.capacity,
                    booked,
                    available: (slot.capacity - booked).max(0),
                }
            })
            .collect())
    }

    pub async fn random_quote(&self) -> Result<QuoteDto, Error> {
        QuoteRepository::new(self.db)
            .random_active()
            .await?
            .map(QuoteDto::from)
            .ok_or_else(|| ContentError::not_found("Quote", "random").into())
    }

    async fn find_active_temple(&self, slug: &str) -> Result<(JyotirlingaModel, CityModel), Error> {
        match JyotirlingaRepository::new(self.db).get_by_slug(slug).await? {
            Some((temple, Some(city))) if temple.is_active => Ok((temple, city)),
            Some((temple, None)) if temple.is_active => Err(Error::InternalError(format!(
                "Jyotirlinga {} references missing city {}",
                temple.slug, temple.city_id
            ))),
            _ => Err(ContentError::not_found("Jyotirlinga", slug).into()),
        }
    }
}
