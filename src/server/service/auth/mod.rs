//! Authentication services: bearer tokens, password hashing, the OTP provider client and
//! admin login.

pub mod admin;
pub mod otp;
pub mod password;
pub mod token;
