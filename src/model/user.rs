use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{i18n::Language, validate_not_blank};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub preferred_language: Language,
}

/// Request an OTP to be sent to a phone number
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SendOtpDto {
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VerifyOtpDto {
    pub phone: String,
    pub otp: String,
}

/// Result of a successful OTP verification
///
/// `token` and `user` are only present when the phone already belongs to a registered user.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct OtpVerificationDto {
    pub phone: String,
    pub is_new_user: bool,
    pub token: Option<String>,
    pub user: Option<UserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterUserDto {
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferred_language: Language,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AuthTokenDto {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: UserDto,
}
