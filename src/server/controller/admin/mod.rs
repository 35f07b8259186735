//! Back office endpoints under `/api/admin`.
//!
//! Every route except login requires an `admin` or `editor` bearer token through the
//! [`AdminAuth`](crate::server::controller::util::extractor::AdminAuth) extractor. Deletes are
//! reserved to the `admin` role.

pub mod auth;
pub mod booking;
pub mod content;
pub mod media;

pub static ADMIN_TAG: &str = "admin";
