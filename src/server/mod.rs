//! Server application core modules.
//!
//! This module contains all server-side functionality for the Kashi Darshan application:
//! HTTP routing, phone OTP and admin authentication, database access, booking rules, media
//! uploads and the cron scheduler for booking maintenance.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
