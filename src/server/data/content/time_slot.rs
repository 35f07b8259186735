use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::admin::UpsertTimeSlotDto;

pub struct TimeSlotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeSlotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the active slots of a darshan type in chronological order
    pub async fn list_active_by_darshan_type(
        &self,
        darshan_type_id: i32,
    ) -> Result<Vec<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::DarshanTypeId.eq(darshan_type_id))
            .filter(entity::time_slot::Column::IsActive.eq(true))
            .order_by_asc(entity::time_slot::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Fetches the rows with the given IDs, missing IDs are skipped
    pub async fn get_many(&self, ids: &[i32]) -> Result<Vec<entity::time_slot::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TimeSlot::find()
            .filter(entity::time_slot::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find_by_id(id).one(self.db).await
    }

    /// Fetches a slot and locks its row until the surrounding transaction ends
    ///
    /// Serializes concurrent bookings of the same slot. SQLite has no row locks and relies
    /// on its database-level write lock instead.
    pub async fn get_for_update(&self, id: i32) -> Result<Option<entity::time_slot::Model>, DbErr> {
        entity::prelude::TimeSlot::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        slot: UpsertTimeSlotDto,
    ) -> Result<entity::time_slot::Model, DbErr> {
        let slot = entity::time_slot::ActiveModel {
            darshan_type_id: ActiveValue::Set(slot.darshan_type_id),
            start_time: ActiveValue::Set(slot.start_time),
            end_time: ActiveValue::Set(slot.end_time),
            capacity: ActiveValue::Set(slot.capacity),
            is_active: ActiveValue::Set(slot.is_active),
            ..Default::default()
        };

        slot.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        slot: UpsertTimeSlotDto,
    ) -> Result<Option<entity::time_slot::Model>, DbErr> {
        let existing = match self.get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut slot_am = existing.into_active_model();
        slot_am.darshan_type_id = ActiveValue::Set(slot.darshan_type_id);
        slot_am.start_time = ActiveValue::Set(slot.start_time);
        slot_am.end_time = ActiveValue::Set(slot.end_time);
        slot_am.capacity = ActiveValue::Set(slot.capacity);
        slot_am.is_active = ActiveValue::Set(slot.is_active);

        Ok(Some(slot_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TimeSlot::delete_by_id(id).exec(self.db).await
    }
}
