//! Client for the third-party OTP provider.
//!
//! The provider speaks JSON over HTTP and authenticates callers with an `authkey` header:
//! `POST /otp/send {phone}` answers 2xx when the code went out, `POST /otp/verify
//! {phone, otp}` answers `{"verified": bool}`.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, external::ExternalError, Error};

#[derive(Serialize)]
struct OtpRequest<'a> {
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    otp: Option<&'a str>,
}

#[derive(Deserialize)]
struct VerifyResponse {
    verified: bool,
}

#[derive(Clone)]
pub struct OtpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OtpClient {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Asks the provider to send a code to a normalized phone number
    pub async fn send(&self, phone: &str) -> Result<(), Error> {
        self.post("/otp/send", &OtpRequest { phone, otp: None })
            .await?;

        tracing::debug!("OTP sent to {}", mask_phone(phone));

        Ok(())
    }

    /// Asks the provider whether `otp` is the current code for `phone`
    pub async fn verify(&self, phone: &str, otp: &str) -> Result<bool, Error> {
        validate_otp_format(otp)?;

        let response = self
            .post(
                "/otp/verify",
                &OtpRequest {
                    phone,
                    otp: Some(otp),
                },
            )
            .await?;
        let body: VerifyResponse = response.json().await.map_err(ExternalError::from)?;

        Ok(body.verified)
    }

    async fn post(&self, path: &str, body: &OtpRequest<'_>) -> Result<reqwest::Response, Error> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .header("authkey", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(ExternalError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(ExternalError::OtpProvider {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(response)
    }
}

/// OTP codes are 4 to 8 ASCII digits
pub fn validate_otp_format(otp: &str) -> Result<(), AuthError> {
    if (4..=8).contains(&otp.len()) && otp.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AuthError::InvalidOtpFormat)
    }
}

/// Keeps the last four digits of a phone number for logs
pub fn mask_phone(phone: &str) -> String {
    let visible = phone.len().saturating_sub(4);
    format!("{}{}", "*".repeat(visible), &phone[visible..])
}
