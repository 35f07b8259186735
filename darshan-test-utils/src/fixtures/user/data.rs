use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::{admin_user, admin_user::AdminRole, app_user};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{fixtures::user::UserFixtures, TestError};

impl<'a> UserFixtures<'a> {
    /// Insert a devotee account for an already normalized phone number.
    pub async fn insert_user(&self, phone: &str) -> Result<app_user::Model, TestError> {
        let now = Utc::now().naive_utc();
        Ok(app_user::ActiveModel {
            phone: ActiveValue::Set(phone.to_string()),
            name: ActiveValue::Set("Test Devotee".to_string()),
            email: ActiveValue::Set(None),
            preferred_language: ActiveValue::Set("en".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert an admin account whose password hashes to `password`.
    pub async fn insert_admin(
        &self,
        username: &str,
        password: &str,
        role: AdminRole,
    ) -> Result<admin_user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(admin_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}
