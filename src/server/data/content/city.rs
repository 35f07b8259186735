use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::admin::UpsertCityDto;

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every city ordered by slug
    pub async fn list(&self) -> Result<Vec<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .order_by_asc(entity::city::Column::Slug)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn create(&self, city: UpsertCityDto) -> Result<entity::city::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let city = entity::city::ActiveModel {
            slug: ActiveValue::Set(city.slug),
            name: ActiveValue::Set(city.name.into()),
            state: ActiveValue::Set(city.state.into()),
            description: ActiveValue::Set(city.description.into()),
            image_url: ActiveValue::Set(city.image_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        city.insert(self.db).await
    }

    /// Replaces every editable field, returns None if the city does not exist
    pub async fn update(
        &self,
        id: i32,
        city: UpsertCityDto,
    ) -> Result<Option<entity::city::Model>, DbErr> {
        let existing = match self.get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut city_am = existing.into_active_model();
        city_am.slug = ActiveValue::Set(city.slug);
        city_am.name = ActiveValue::Set(city.name.into());
        city_am.state = ActiveValue::Set(city.state.into());
        city_am.description = ActiveValue::Set(city.description.into());
        city_am.image_url = ActiveValue::Set(city.image_url);
        city_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(city_am.update(self.db).await?))
    }

    /// Deletes a city and, by cascade, its temples
    ///
    /// Check [`DeleteResult::rows_affected`] to learn whether the city existed.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::City::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use darshan_test_utils::prelude::*;

    use crate::{
        model::{admin::UpsertCityDto, i18n::LocalizedTextDto},
        server::data::content::city::CityRepository,
    };

    fn city_dto(slug: &str) -> UpsertCityDto {
        UpsertCityDto {
            slug: slug.to_string(),
            name: LocalizedTextDto {
                en: "Ujjain".to_string(),
                hi: Some("उज्जैन".to_string()),
            },
            state: LocalizedTextDto {
                en: "Madhya Pradesh".to_string(),
                hi: None,
            },
            description: LocalizedTextDto {
                en: "Home of Mahakaleshwar.".to_string(),
                hi: None,
            },
            image_url: None,
        }
    }

    /// Expect a created city to be found by slug with its Hindi name intact
    #[tokio::test]
    async fn creates_and_finds_city_by_slug() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let city_repository = CityRepository::new(&test.db);

        city_repository.create(city_dto("ujjain")).await?;
        let city = city_repository.get_by_slug("ujjain").await?.unwrap();

        assert_eq!(city.name.hi.as_deref(), Some("उज्जैन"));

        Ok(())
    }

    /// Expect None when updating a city that does not exist
    #[tokio::test]
    async fn update_returns_none_for_missing_city() -> Result<(), TestError> {
        let test = TestBuilder::new().with_content_tables().build().await?;
        let city_repository = CityRepository::new(&test.db);

        let result = city_repository.update(42, city_dto("ujjain")).await?;

        assert!(result.is_none());

        Ok(())
    }
}
