//! Server application models and type definitions.
//!
//! Application state, database model aliases, token claims and session data wrappers.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
