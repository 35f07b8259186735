use crate::TestContext;

pub mod mockito;

impl TestContext {
    pub fn cloudinary<'a>(&'a mut self) -> CloudinaryFixtures<'a> {
        CloudinaryFixtures { setup: self }
    }
}

pub struct CloudinaryFixtures<'a> {
    pub setup: &'a mut TestContext,
}
