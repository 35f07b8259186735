use entity::{city, darshan_type, jyotirlinga, time_slot};

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn content<'a>(&'a mut self) -> ContentFixtures<'a> {
        ContentFixtures { setup: self }
    }
}

pub struct ContentFixtures<'a> {
    pub setup: &'a mut TestContext,
}

/// A bookable temple: its city, one darshan type and one time slot.
#[derive(Clone, Debug)]
pub struct MockTemple {
    pub city: city::Model,
    pub jyotirlinga: jyotirlinga::Model,
    pub darshan_type: darshan_type::Model,
    pub time_slot: time_slot::Model,
}
