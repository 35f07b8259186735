use chrono::{NaiveTime, Utc};
use entity::{
    city, darshan_type, jyotirlinga,
    localized::{LocalizedText, MediaGallery},
    quote, time_slot,
};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    fixtures::content::{factory::localized, ContentFixtures, MockTemple},
    TestError,
};

impl<'a> ContentFixtures<'a> {
    pub async fn insert_mock_city(&self, slug: &str) -> Result<city::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(city::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(localized("Varanasi", Some("वाराणसी"))),
            state: ActiveValue::Set(localized("Uttar Pradesh", Some("उत्तर प्रदेश"))),
            description: ActiveValue::Set(localized("The city of light.", None)),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_jyotirlinga(
        &self,
        city_id: i32,
        slug: &str,
    ) -> Result<jyotirlinga::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(jyotirlinga::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            city_id: ActiveValue::Set(city_id),
            name: ActiveValue::Set(localized("Kashi Vishwanath", Some("काशी विश्वनाथ"))),
            description: ActiveValue::Set(localized("Temple of Lord Shiva.", None)),
            significance: ActiveValue::Set(localized("One of the twelve Jyotirlingas.", None)),
            address: ActiveValue::Set("Lahori Tola, Varanasi".to_string()),
            image_url: ActiveValue::Set(None),
            gallery: ActiveValue::Set(MediaGallery::default()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a darshan type priced at `price_paise` per person.
    pub async fn insert_mock_darshan_type(
        &self,
        jyotirlinga_id: i32,
        slug: &str,
        price_paise: i64,
        max_persons_per_booking: i32,
    ) -> Result<darshan_type::Model, TestError> {
        Ok(darshan_type::ActiveModel {
            jyotirlinga_id: ActiveValue::Set(jyotirlinga_id),
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(localized("Sugam Darshan", Some("सुगम दर्शन"))),
            description: ActiveValue::Set(localized("Priority queue entry.", None)),
            price_paise: ActiveValue::Set(price_paise),
            duration_minutes: ActiveValue::Set(45),
            max_persons_per_booking: ActiveValue::Set(max_persons_per_booking),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert an active two hour slot starting at `start_hour`.
    pub async fn insert_mock_time_slot(
        &self,
        darshan_type_id: i32,
        start_hour: u32,
        capacity: i32,
    ) -> Result<time_slot::Model, TestError> {
        let start_time = NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap_or_default();
        let end_time = NaiveTime::from_hms_opt((start_hour + 2).min(23), 0, 0).unwrap_or_default();

        Ok(time_slot::ActiveModel {
            darshan_type_id: ActiveValue::Set(darshan_type_id),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            capacity: ActiveValue::Set(capacity),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_quote(&self, text: &str) -> Result<quote::Model, TestError> {
        Ok(quote::ActiveModel {
            text: ActiveValue::Set(LocalizedText::new(text, None)),
            author: ActiveValue::Set(localized("Adi Shankaracharya", None)),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a temple in Varanasi with one darshan type (INR 300 per person, up to 5 persons)
    /// and one 06:00-08:00 slot holding `capacity` persons.
    ///
    /// The `varanasi` city is reused when it already exists.
    pub async fn insert_mock_temple(
        &self,
        slug: &str,
        capacity: i32,
    ) -> Result<MockTemple, TestError> {
        let city = match entity::prelude::City::find()
            .filter(city::Column::Slug.eq("varanasi"))
            .one(&self.setup.db)
            .await?
        {
            Some(city) => city,
            None => self.insert_mock_city("varanasi").await?,
        };

        let jyotirlinga = self.insert_mock_jyotirlinga(city.id, slug).await?;
        let darshan_type = self
            .insert_mock_darshan_type(jyotirlinga.id, &format!("{}-sugam", slug), 30_000, 5)
            .await?;
        let time_slot = self
            .insert_mock_time_slot(darshan_type.id, 6, capacity)
            .await?;

        Ok(MockTemple {
            city,
            jyotirlinga,
            darshan_type,
            time_slot,
        })
    }
}
