use crate::TestContext;

pub mod mockito;

impl TestContext {
    pub fn otp<'a>(&'a mut self) -> OtpFixtures<'a> {
        OtpFixtures { setup: self }
    }
}

pub struct OtpFixtures<'a> {
    pub setup: &'a mut TestContext,
}
