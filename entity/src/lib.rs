//! SeaORM entities for the Kashi Darshan database schema.

pub mod prelude;

pub mod admin_user;
pub mod app_user;
pub mod booking;
pub mod city;
pub mod darshan_type;
pub mod jyotirlinga;
pub mod localized;
pub mod quote;
pub mod time_slot;
