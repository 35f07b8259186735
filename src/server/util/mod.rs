//! Utility functions shared by services, controllers and scheduled jobs.
//!
//! Phone number normalization and India Standard Time calendar helpers.

pub mod phone;
pub mod time;
