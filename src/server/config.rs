//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Default token lifetime, one week.
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 168;
/// Minimum accepted length of `JWT_SECRET` in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;
pub const DEFAULT_CLOUDINARY_API_URL: &str = "https://api.cloudinary.com";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    pub otp_provider_url: String,
    pub otp_provider_key: String,
    pub cloudinary: CloudinaryConfig,
    pub admin_bootstrap: Option<AdminBootstrap>,
}

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub api_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Credentials for the admin account created on first startup.
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_SECRET_LEN),
            });
        }

        let jwt_expiry_hours = match lookup("JWT_EXPIRY_HOURS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "JWT_EXPIRY_HOURS".to_string(),
                        reason: format!("expected a positive number of hours, got {:?}", value),
                    })
                }
            },
            None => DEFAULT_JWT_EXPIRY_HOURS,
        };

        let admin_bootstrap = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminBootstrap { username, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string())),
            (None, Some(_)) => return Err(ConfigError::MissingEnvVar("ADMIN_USERNAME".to_string())),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            jwt_secret,
            jwt_expiry_hours,
            otp_provider_url: required("OTP_PROVIDER_URL")?,
            otp_provider_key: required("OTP_PROVIDER_KEY")?,
            cloudinary: CloudinaryConfig {
                api_url: lookup("CLOUDINARY_API_URL")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_URL.to_string()),
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
            },
            admin_bootstrap,
        })
    }
}
