use crate::TestContext;

pub mod data;

impl TestContext {
    pub fn booking<'a>(&'a mut self) -> BookingFixtures<'a> {
        BookingFixtures { setup: self }
    }
}

pub struct BookingFixtures<'a> {
    pub setup: &'a mut TestContext,
}
