use dioxus_logger::tracing;
use entity::admin_user::AdminRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::admin::AdminTokenDto,
    server::{
        data::user::admin::AdminUserRepository,
        error::{auth::AuthError, Error},
        model::{auth::Role, db::AdminUserModel},
        service::auth::{
            password::{hash_password, verify_password},
            token::TokenService,
        },
    },
};

pub struct AdminAuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AdminAuthService<'a> {
    /// Creates a new instance of [`AdminAuthService`]
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks admin credentials and issues an admin token
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<AdminTokenDto, Error> {
        let admin_repository = AdminUserRepository::new(self.db);

        let admin = match admin_repository.get_by_username(username).await? {
            Some(admin) => admin,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !verify_password(password, &admin.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let admin = admin_repository.touch_last_login(admin).await?;
        let role = Role::from(admin.role);
        let token = self.tokens.issue(admin.id, role)?;

        tracing::info!("Admin {} logged in", admin.username);

        Ok(AdminTokenDto {
            token,
            username: admin.username,
            role: role.to_string(),
        })
    }

    /// Creates the first `admin` account when no admin exists yet
    ///
    /// Returns the created account, or None when admins already exist.
    pub async fn bootstrap(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUserModel>, Error> {
        let admin_repository = AdminUserRepository::new(self.db);

        if admin_repository.count().await? > 0 {
            return Ok(None);
        }

        let password_hash = hash_password(password)?;
        let admin = admin_repository
            .create(username, &password_hash, AdminRole::Admin)
            .await?;

        tracing::info!("Created bootstrap admin account {}", admin.username);

        Ok(Some(admin))
    }
}

#[cfg(test)]
mod tests {
    mod login {
        use darshan_test_utils::{
            constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME, TEST_JWT_SECRET},
            prelude::*,
        };
        use entity::admin_user::AdminRole;

        use crate::server::{
            data::user::admin::AdminUserRepository,
            error::{auth::AuthError, Error},
            model::auth::Role,
            service::auth::{admin::AdminAuthService, token::TokenService},
        };

        /// Expect a verifiable editor token and a recorded login
        #[tokio::test]
        async fn issues_token_for_valid_credentials() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_content_tables()
                .with_mock_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD, AdminRole::Editor)
                .build()
                .await?;
            let tokens = TokenService::new(TEST_JWT_SECRET, 1);

            let result = AdminAuthService::new(&test.db, &tokens)
                .login(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
                .await;

            assert!(result.is_ok());
            let login = result.unwrap();
            assert_eq!(login.role, "editor");
            assert_eq!(tokens.verify(&login.token).unwrap().role, Role::Editor);

            let admin = AdminUserRepository::new(&test.db)
                .get_by_username(TEST_ADMIN_USERNAME)
                .await?
                .unwrap();
            assert!(admin.last_login_at.is_some());

            Ok(())
        }

        /// Expect the same error for a wrong password and an unknown username
        #[tokio::test]
        async fn rejects_invalid_credentials() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_content_tables()
                .with_mock_admin(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD, AdminRole::Admin)
                .build()
                .await?;
            let tokens = TokenService::new(TEST_JWT_SECRET, 1);
            let service = AdminAuthService::new(&test.db, &tokens);

            let wrong_password = service.login(TEST_ADMIN_USERNAME, "nope").await;
            let unknown_user = service.login("nobody", TEST_ADMIN_PASSWORD).await;

            assert!(matches!(
                wrong_password,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));
            assert!(matches!(
                unknown_user,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }

    mod bootstrap {
        use darshan_test_utils::{constant::TEST_JWT_SECRET, prelude::*};
        use entity::admin_user::AdminRole;

        use crate::server::service::auth::{admin::AdminAuthService, token::TokenService};

        /// Expect an admin to be created only while none exist
        #[tokio::test]
        async fn creates_admin_only_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_content_tables().build().await?;
            let tokens = TokenService::new(TEST_JWT_SECRET, 1);
            let service = AdminAuthService::new(&test.db, &tokens);

            let first = service.bootstrap("root", "secret-password").await.unwrap();
            let second = service.bootstrap("root2", "secret-password").await.unwrap();

            assert_eq!(first.map(|a| a.role), Some(AdminRole::Admin));
            assert!(second.is_none());

            Ok(())
        }
    }
}
