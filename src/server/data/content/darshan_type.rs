use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::admin::UpsertDarshanTypeDto;

pub struct DarshanTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DarshanTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the active darshan types of a temple, cheapest first
    pub async fn list_active_by_jyotirlinga(
        &self,
        jyotirlinga_id: i32,
    ) -> Result<Vec<entity::darshan_type::Model>, DbErr> {
        entity::prelude::DarshanType::find()
            .filter(entity::darshan_type::Column::JyotirlingaId.eq(jyotirlinga_id))
            .filter(entity::darshan_type::Column::IsActive.eq(true))
            .order_by_asc(entity::darshan_type::Column::PricePaise)
            .order_by_asc(entity::darshan_type::Column::Id)
            .all(self.db)
            .await
    }

    /// Fetches the rows with the given IDs, missing IDs are skipped
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<entity::darshan_type::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DarshanType::find()
            .filter(entity::darshan_type::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::darshan_type::Model>, DbErr> {
        entity::prelude::DarshanType::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        darshan_type: UpsertDarshanTypeDto,
    ) -> Result<entity::darshan_type::Model, DbErr> {
        let darshan_type = entity::darshan_type::ActiveModel {
            jyotirlinga_id: ActiveValue::Set(darshan_type.jyotirlinga_id),
            slug: ActiveValue::Set(darshan_type.slug),
            name: ActiveValue::Set(darshan_type.name.into()),
            description: ActiveValue::Set(darshan_type.description.into()),
            price_paise: ActiveValue::Set(darshan_type.price_paise),
            duration_minutes: ActiveValue::Set(darshan_type.duration_minutes),
            max_persons_per_booking: ActiveValue::Set(darshan_type.max_persons_per_booking),
            is_active: ActiveValue::Set(darshan_type.is_active),
            ..Default::default()
        };

        darshan_type.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        darshan_type: UpsertDarshanTypeDto,
    ) -> Result<Option<entity::darshan_type::Model>, DbErr> {
        let existing = match self.get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut darshan_type_am = existing.into_active_model();
        darshan_type_am.jyotirlinga_id = ActiveValue::Set(darshan_type.jyotirlinga_id);
        darshan_type_am.slug = ActiveValue::Set(darshan_type.slug);
        darshan_type_am.name = ActiveValue::Set(darshan_type.name.into());
        darshan_type_am.description = ActiveValue::Set(darshan_type.description.into());
        darshan_type_am.price_paise = ActiveValue::Set(darshan_type.price_paise);
        darshan_type_am.duration_minutes = ActiveValue::Set(darshan_type.duration_minutes);
        darshan_type_am.max_persons_per_booking =
            ActiveValue::Set(darshan_type.max_persons_per_booking);
        darshan_type_am.is_active = ActiveValue::Set(darshan_type.is_active);

        Ok(Some(darshan_type_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DarshanType::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
