//! `Cache-Control` header values.

use axum::http::{header, HeaderName};

/// Max age of public content lists and details.
pub const CONTENT_MAX_AGE_SECS: u32 = 300;
/// How long stale content may be served while it is revalidated.
pub const CONTENT_STALE_SECS: u32 = 60;

/// For responses that depend on the caller or change with every booking.
pub const PRIVATE_NO_CACHE: &str = "private, no-cache, must-revalidate";
/// For documents that must never be written to a cache, like receipts.
pub const PRIVATE_NO_STORE: &str = "private, no-store";

pub fn public_cache(max_age_secs: u32, stale_while_revalidate_secs: u32) -> String {
    format!(
        "public, max-age={}, stale-while-revalidate={}",
        max_age_secs, stale_while_revalidate_secs
    )
}

/// Header pair for public content
pub fn public_content() -> [(HeaderName, String); 1] {
    [(
        header::CACHE_CONTROL,
        public_cache(CONTENT_MAX_AGE_SECS, CONTENT_STALE_SECS),
    )]
}

/// Header pair for per-user responses
pub fn private_no_cache() -> [(HeaderName, &'static str); 1] {
    [(header::CACHE_CONTROL, PRIVATE_NO_CACHE)]
}
