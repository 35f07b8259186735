pub mod admin;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::i18n::Language;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user for an already normalized phone number
    pub async fn create(
        &self,
        phone: &str,
        name: &str,
        email: Option<&str>,
        preferred_language: Language,
    ) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::app_user::ActiveModel {
            phone: ActiveValue::Set(phone.to_string()),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.map(str::to_string)),
            preferred_language: ActiveValue::Set(preferred_language.code().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Phone.eq(phone))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use darshan_test_utils::{constant::TEST_PHONE, prelude::*};

        use crate::{model::i18n::Language, server::data::user::UserRepository};

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let user = user_repository
                .create(TEST_PHONE, "Asha", Some("asha@example.com"), Language::Hi)
                .await?;

            assert_eq!(user.phone, TEST_PHONE);
            assert_eq!(user.preferred_language, "hi");

            Ok(())
        }

        /// Expect Error when the phone number is already registered
        #[tokio::test]
        async fn fails_for_duplicate_phone() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_content_tables()
                .with_mock_user(TEST_PHONE)
                .build()
                .await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository
                .create(TEST_PHONE, "Asha", None, Language::En)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_phone {
        use darshan_test_utils::{constant::TEST_PHONE, prelude::*};

        use crate::server::data::user::UserRepository;

        /// Expect Some for a registered phone and None otherwise
        #[tokio::test]
        async fn finds_user_by_phone() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_content_tables()
                .with_mock_user(TEST_PHONE)
                .build()
                .await?;

            let user_repository = UserRepository::new(&test.db);

            assert!(user_repository.get_by_phone(TEST_PHONE).await?.is_some());
            assert!(user_repository
                .get_by_phone("+919999999999")
                .await?
                .is_none());

            Ok(())
        }
    }
}
