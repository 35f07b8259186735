use std::time::Duration as StdDuration;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::{external::ExternalError, Error},
    model::app::AppState,
    service::{
        auth::{admin::AdminAuthService, otp::OtpClient, token::TokenService},
        media::cloudinary::CloudinaryClient,
    },
};

static USER_AGENT: &str = concat!("kashi-darshan/", env!("CARGO_PKG_VERSION"));

/// Timeout for calls to the OTP provider and Cloudinary
const HTTP_TIMEOUT: StdDuration = StdDuration::from_secs(20);

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{Config as RedisConfig, *};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Build the shared state handed to every request handler
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(ExternalError::from)?;

    Ok(AppState {
        db,
        tokens: TokenService::new(&config.jwt_secret, config.jwt_expiry_hours),
        otp_client: OtpClient::new(
            http.clone(),
            &config.otp_provider_url,
            &config.otp_provider_key,
        ),
        cloudinary: CloudinaryClient::new(http, &config.cloudinary),
    })
}

/// Create the first admin account if credentials are configured and no admin exists
pub async fn bootstrap_admin(config: &Config, state: &AppState) -> Result<(), Error> {
    let Some(bootstrap) = &config.admin_bootstrap else {
        return Ok(());
    };

    let created = AdminAuthService::new(&state.db, &state.tokens)
        .bootstrap(&bootstrap.username, &bootstrap.password)
        .await?;

    if created.is_none() {
        tracing::debug!("Admin accounts exist, skipping admin bootstrap");
    }

    Ok(())
}
