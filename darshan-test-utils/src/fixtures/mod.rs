//! Fixture utilities used while a test runs.
//!
//! - `content` - cities, temples, darshan types, time slots and quotes
//! - `user` - devotee and admin accounts
//! - `booking` - bookings against a mock temple
//! - `otp` - OTP provider mock endpoints
//! - `cloudinary` - Cloudinary mock endpoints

pub mod booking;
pub mod cloudinary;
pub mod content;
pub mod otp;
pub mod user;
