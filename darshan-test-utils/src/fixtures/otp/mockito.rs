//! OTP provider mock endpoints.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::TEST_OTP_PROVIDER_KEY, fixtures::otp::OtpFixtures};

impl<'a> OtpFixtures<'a> {
    /// Mock `POST /otp/send` for `phone`, answering with `status`.
    pub fn create_send_endpoint(&mut self, phone: &str, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/otp/send")
            .match_header("authkey", TEST_OTP_PROVIDER_KEY)
            .match_body(Matcher::PartialJson(json!({ "phone": phone })))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "type": "success" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /otp/verify` for `phone`, answering `{"verified": verified}`.
    pub fn create_verify_endpoint(
        &mut self,
        phone: &str,
        verified: bool,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/otp/verify")
            .match_header("authkey", TEST_OTP_PROVIDER_KEY)
            .match_body(Matcher::PartialJson(json!({ "phone": phone })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "verified": verified }).to_string())
            .expect(expected_requests)
            .create()
    }
}
