//! Session data models.
//!
//! Type-safe wrappers around values stored in the Valkey-backed tower-sessions store.

pub mod otp;
pub mod user;
