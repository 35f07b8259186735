//! Repositories for the browsable content: cities, temples, darshan types, time slots and
//! quotes.

pub mod city;
pub mod darshan_type;
pub mod jyotirlinga;
pub mod quote;
pub mod time_slot;
