//! Database repositories.
//!
//! Each repository borrows any `ConnectionTrait` so it runs equally on a pooled connection or
//! inside a transaction.

pub mod booking;
pub mod content;
pub mod user;
