//! Request helpers shared by the controllers.
//!
//! Extractors resolving the caller from a bearer token or the session cookie, and the
//! `Cache-Control` values used by the content and booking endpoints.

pub mod cache;
pub mod extractor;
