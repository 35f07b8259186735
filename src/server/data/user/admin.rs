use chrono::Utc;
use entity::admin_user::AdminRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};

pub struct AdminUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: AdminRole,
    ) -> Result<entity::admin_user::Model, DbErr> {
        let admin = entity::admin_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        };

        admin.insert(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::AdminUser::find().count(self.db).await
    }

    /// Records a successful login
    pub async fn touch_last_login(
        &self,
        admin: entity::admin_user::Model,
    ) -> Result<entity::admin_user::Model, DbErr> {
        let mut admin_am = admin.into_active_model();
        admin_am.last_login_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        admin_am.update(self.db).await
    }
}
