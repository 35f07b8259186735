//! HTTP controller endpoints for the Kashi Darshan API.
//!
//! Axum handlers for OTP authentication, content browsing, bookings and the admin back office.
//! Controllers extract and validate inputs, call into the services and shape the HTTP response,
//! including its `Cache-Control` header. Every handler is documented for utoipa.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod content;
pub mod util;
