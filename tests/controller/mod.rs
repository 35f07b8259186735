//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with their extractors, the same way axum would after routing.

mod admin;
mod auth;
mod booking;
mod content;
mod extractor;

use darshan_test_utils::prelude::*;

use crate::util::TestContextExt;
