use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::RegisterUserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }

    /// Finds the user registered for a normalized phone number
    pub async fn get_by_phone(&self, phone: &str) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_by_phone(phone).await?)
    }

    /// Registers a devotee for a verified, normalized phone number
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The new user
    /// - `Err(AuthError::PhoneAlreadyRegistered)` - The phone already belongs to a user
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn register(&self, phone: &str, user: &RegisterUserDto) -> Result<UserModel, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository.get_by_phone(phone).await?.is_some() {
            return Err(AuthError::PhoneAlreadyRegistered(phone.to_string()).into());
        }

        let email = user
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty());

        match user_repository
            .create(phone, user.name.trim(), email, user.preferred_language)
            .await
        {
            Ok(user) => Ok(user),
            // Lost a race against a concurrent registration for the same phone
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthError::PhoneAlreadyRegistered(phone.to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
