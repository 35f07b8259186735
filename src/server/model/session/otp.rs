//! Phone verification state kept between OTP verification and registration or login.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_VERIFIED_PHONE_KEY: &str = "darshan:otp:verified_phone";

/// Normalized phone number the OTP provider confirmed for this session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionVerifiedPhone(pub String);

impl SessionVerifiedPhone {
    pub async fn insert(session: &Session, phone: &str) -> Result<(), Error> {
        session
            .insert(SESSION_VERIFIED_PHONE_KEY, SessionVerifiedPhone(phone.to_string()))
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionVerifiedPhone>(SESSION_VERIFIED_PHONE_KEY)
            .await?
            .map(|SessionVerifiedPhone(phone)| phone))
    }

    /// Removes the verified phone once it has been used to register.
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionVerifiedPhone>(SESSION_VERIFIED_PHONE_KEY)
            .await?;

        Ok(())
    }
}
