use chrono::Utc;
use entity::localized::MediaGallery;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::admin::UpsertJyotirlingaDto;

pub struct JyotirlingaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JyotirlingaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists active temples, optionally restricted to one city
    pub async fn list_active(
        &self,
        city_id: Option<i32>,
    ) -> Result<Vec<entity::jyotirlinga::Model>, DbErr> {
        let mut query = entity::prelude::Jyotirlinga::find()
            .filter(entity::jyotirlinga::Column::IsActive.eq(true));

        if let Some(city_id) = city_id {
            query = query.filter(entity::jyotirlinga::Column::CityId.eq(city_id));
        }

        query
            .order_by_asc(entity::jyotirlinga::Column::Slug)
            .all(self.db)
            .await
    }

    /// Fetches the rows with the given IDs, missing IDs are skipped
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<entity::jyotirlinga::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Jyotirlinga::find()
            .filter(entity::jyotirlinga::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::jyotirlinga::Model>, DbErr> {
        entity::prelude::Jyotirlinga::find_by_id(id).one(self.db).await
    }

    /// Gets a temple by slug together with its city
    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<(entity::jyotirlinga::Model, Option<entity::city::Model>)>, DbErr> {
        entity::prelude::Jyotirlinga::find()
            .filter(entity::jyotirlinga::Column::Slug.eq(slug))
            .find_also_related(entity::city::Entity)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        temple: UpsertJyotirlingaDto,
    ) -> Result<entity::jyotirlinga::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let temple = entity::jyotirlinga::ActiveModel {
            slug: ActiveValue::Set(temple.slug),
            city_id: ActiveValue::Set(temple.city_id),
            name: ActiveValue::Set(temple.name.into()),
            description: ActiveValue::Set(temple.description.into()),
            significance: ActiveValue::Set(temple.significance.into()),
            address: ActiveValue::Set(temple.address),
            image_url: ActiveValue::Set(temple.image_url),
            gallery: ActiveValue::Set(MediaGallery(temple.gallery)),
            is_active: ActiveValue::Set(temple.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        temple.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        temple: UpsertJyotirlingaDto,
    ) -> Result<Option<entity::jyotirlinga::Model>, DbErr> {
        let existing = match self.get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut temple_am = existing.into_active_model();
        temple_am.slug = ActiveValue::Set(temple.slug);
        temple_am.city_id = ActiveValue::Set(temple.city_id);
        temple_am.name = ActiveValue::Set(temple.name.into());
        temple_am.description = ActiveValue::Set(temple.description.into());
        temple_am.significance = ActiveValue::Set(temple.significance.into());
        temple_am.address = ActiveValue::Set(temple.address);
        temple_am.image_url = ActiveValue::Set(temple.image_url);
        temple_am.gallery = ActiveValue::Set(MediaGallery(temple.gallery));
        temple_am.is_active = ActiveValue::Set(temple.is_active);
        temple_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(temple_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Jyotirlinga::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use darshan_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    use crate::server::data::content::jyotirlinga::JyotirlingaRepository;

    /// Expect inactive temples and temples of other cities to be filtered out
    #[tokio::test]
    async fn lists_only_active_temples_of_city() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_content_tables()
            .with_mock_temple("kashi-vishwanath", 10)
            .with_mock_temple("kaal-bhairav", 10)
            .build()
            .await?;
        let other_city = test.content().insert_mock_city("ujjain").await?;
        test.content()
            .insert_mock_jyotirlinga(other_city.id, "mahakaleshwar")
            .await?;

        let repository = JyotirlingaRepository::new(&test.db);
        let (hidden, city) = repository.get_by_slug("kaal-bhairav").await?.unwrap();
        let mut hidden_am = hidden.into_active_model();
        hidden_am.is_active = ActiveValue::Set(false);
        hidden_am.update(&test.db).await?;

        let temples = repository.list_active(city.map(|c| c.id)).await?;

        assert_eq!(temples.len(), 1);
        assert_eq!(temples[0].slug, "kashi-vishwanath");

        let all = repository.list_active(None).await?;
        assert_eq!(all.len(), 2);

        Ok(())
    }
}
