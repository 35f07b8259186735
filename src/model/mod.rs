//! Data transfer objects shared between the server API and the web client.

pub mod admin;
pub mod api;
pub mod booking;
pub mod content;
pub mod i18n;
pub mod user;

use validator::ValidationError;

/// Rejects values made only of whitespace, which would be stored empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
