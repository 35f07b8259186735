//! JSON calls to the server API.
//!
//! Requests include the session cookie, which is how the web client stays logged in after the
//! OTP flow.

use serde::{de::DeserializeOwned, Serialize};

use crate::model::{
    booking::{BookingDto, CreateBookingDto},
    content::{JyotirlingaDetailDto, JyotirlingaDto, QuoteDto, SlotAvailabilityDto},
    user::{
        AuthTokenDto, LoginDto, OtpVerificationDto, RegisterUserDto, SendOtpDto, UserDto,
        VerifyOtpDto,
    },
};

pub async fn get_jyotirlingas() -> Result<Vec<JyotirlingaDto>, String> {
    get("/api/jyotirlingas").await
}

pub async fn get_jyotirlinga(slug: &str) -> Result<JyotirlingaDetailDto, String> {
    get(&format!("/api/jyotirlingas/{}", slug)).await
}

pub async fn get_slot_availability(
    darshan_type_id: i32,
    date: &str,
) -> Result<Vec<SlotAvailabilityDto>, String> {
    get(&format!(
        "/api/darshan-types/{}/slots?date={}",
        darshan_type_id, date
    ))
    .await
}

/// A random quote, None when none are published
pub async fn get_random_quote() -> Result<Option<QuoteDto>, String> {
    get_optional("/api/quotes/random").await
}

/// The logged in user, None when not logged in
pub async fn get_me() -> Result<Option<UserDto>, String> {
    get_optional("/api/auth/me").await
}

pub async fn send_otp(phone: &str) -> Result<(), String> {
    let _: serde_json::Value = post(
        "/api/auth/otp/send",
        &SendOtpDto {
            phone: phone.to_string(),
        },
    )
    .await?;

    Ok(())
}

pub async fn verify_otp(phone: &str, otp: &str) -> Result<OtpVerificationDto, String> {
    post(
        "/api/auth/otp/verify",
        &VerifyOtpDto {
            phone: phone.to_string(),
            otp: otp.to_string(),
        },
    )
    .await
}

pub async fn register(user: &RegisterUserDto) -> Result<AuthTokenDto, String> {
    post("/api/auth/register", user).await
}

pub async fn login(phone: &str) -> Result<AuthTokenDto, String> {
    post(
        "/api/auth/login",
        &LoginDto {
            phone: phone.to_string(),
        },
    )
    .await
}

pub async fn logout() -> Result<(), String> {
    let _: serde_json::Value = post("/api/auth/logout", &serde_json::json!({})).await?;

    Ok(())
}

pub async fn get_bookings() -> Result<Vec<BookingDto>, String> {
    get("/api/bookings").await
}

pub async fn create_booking(booking: &CreateBookingDto) -> Result<BookingDto, String> {
    post("/api/bookings", booking).await
}

pub async fn cancel_booking(receipt_number: &str) -> Result<BookingDto, String> {
    post(
        &format!("/api/bookings/{}/cancel", receipt_number),
        &serde_json::json!({}),
    )
    .await
}

/// Link target for downloading a receipt PDF
pub fn receipt_url(receipt_number: &str) -> String {
    format!("/api/bookings/{}/receipt", receipt_number)
}

#[cfg(feature = "web")]
async fn get<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
async fn post<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let body = serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let response = Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    parse_response(response).await
}

#[cfg(feature = "web")]
async fn get_optional<T: DeserializeOwned>(url: &str) -> Result<Option<T>, String> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::get(url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        401 | 404 => Ok(None),
        _ => parse_response(response).await.map(Some),
    }
}

#[cfg(feature = "web")]
async fn parse_response<T: DeserializeOwned>(response: reqwasm::http::Response) -> Result<T, String> {
    use crate::model::api::ErrorDto;

    let status = response.status();
    if (200..300).contains(&status) {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        Err(error_dto.error)
    } else {
        Err(format!("Request failed with status {}", status))
    }
}

// Server side rendering never calls the API, data is fetched once hydrated in the browser
#[cfg(not(feature = "web"))]
async fn get<T: DeserializeOwned>(_url: &str) -> Result<T, String> {
    Err("API calls are only made from the browser".to_string())
}

#[cfg(not(feature = "web"))]
async fn post<B: Serialize, T: DeserializeOwned>(_url: &str, _body: &B) -> Result<T, String> {
    Err("API calls are only made from the browser".to_string())
}

#[cfg(not(feature = "web"))]
async fn get_optional<T: DeserializeOwned>(_url: &str) -> Result<Option<T>, String> {
    Ok(None)
}
