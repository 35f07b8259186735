//! Placeholder credentials used when building test clients and tokens.
//!
//! None of these are real secrets.

/// HS256 secret for test tokens, long enough to pass config validation.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret-that-is-at-least-32-bytes";

/// Token lifetime used by test token services.
pub const TEST_JWT_EXPIRY_HOURS: i64 = 168;

/// API key sent in the `authkey` header to the mock OTP provider.
pub static TEST_OTP_PROVIDER_KEY: &str = "otp_provider_key";

pub static TEST_CLOUDINARY_CLOUD_NAME: &str = "kashi-test";
pub static TEST_CLOUDINARY_API_KEY: &str = "123456789012345";
pub static TEST_CLOUDINARY_API_SECRET: &str = "cloudinary_api_secret";

/// Normalized phone number used by user fixtures.
pub static TEST_PHONE: &str = "+919876543210";

pub static TEST_ADMIN_USERNAME: &str = "admin";
pub static TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";
