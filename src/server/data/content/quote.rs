use chrono::Utc;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::admin::UpsertQuoteDto;

pub struct QuoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Picks a uniformly random active quote, None when there are none
    pub async fn random_active(&self) -> Result<Option<entity::quote::Model>, DbErr> {
        let active = entity::prelude::Quote::find()
            .filter(entity::quote::Column::IsActive.eq(true));

        let count = active.clone().count(self.db).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::rng().random_range(0..count);

        active
            .order_by_asc(entity::quote::Column::Id)
            .offset(offset)
            .limit(1)
            .one(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<entity::quote::Model>, DbErr> {
        entity::prelude::Quote::find_by_id(id).one(self.db).await
    }

    pub async fn create(&self, quote: UpsertQuoteDto) -> Result<entity::quote::Model, DbErr> {
        let quote = entity::quote::ActiveModel {
            text: ActiveValue::Set(quote.text.into()),
            author: ActiveValue::Set(quote.author.into()),
            is_active: ActiveValue::Set(quote.is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        quote.insert(self.db).await
    }

    pub async fn update(
        &self,
        id: i32,
        quote: UpsertQuoteDto,
    ) -> Result<Option<entity::quote::Model>, DbErr> {
        let existing = match self.get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut quote_am = existing.into_active_model();
        quote_am.text = ActiveValue::Set(quote.text.into());
        quote_am.author = ActiveValue::Set(quote.author.into());
        quote_am.is_active = ActiveValue::Set(quote.is_active);

        Ok(Some(quote_am.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Quote::delete_by_id(id).exec(self.db).await
    }
}
