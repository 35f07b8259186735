//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories: they enforce the booking rules,
//! talk to the OTP provider and Cloudinary, and convert database models into API DTOs.

pub mod auth;
pub mod booking;
pub mod content;
pub mod media;
pub mod user;
