//! Cloudinary upload API mock endpoints.

use mockito::Mock;
use serde_json::json;

use crate::{constant::TEST_CLOUDINARY_CLOUD_NAME, fixtures::cloudinary::CloudinaryFixtures};

impl<'a> CloudinaryFixtures<'a> {
    /// Mock the signed image upload, answering with an uploaded asset under `public_id`.
    pub fn create_upload_endpoint(
        &mut self,
        public_id: &str,
        bytes: u64,
        format: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "secure_url": format!(
                "https://res.cloudinary.com/{}/image/upload/v1/{}.{}",
                TEST_CLOUDINARY_CLOUD_NAME, public_id, format
            ),
            "public_id": public_id,
            "bytes": bytes,
            "format": format,
        });

        self.setup
            .server
            .mock(
                "POST",
                format!("/v1_1/{}/image/upload", TEST_CLOUDINARY_CLOUD_NAME).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a failing upload answering with `status`.
    pub fn create_upload_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock(
                "POST",
                format!("/v1_1/{}/image/upload", TEST_CLOUDINARY_CLOUD_NAME).as_str(),
            )
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": { "message": "Invalid Signature" } }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock the signed destroy call, answering `{"result": result}`.
    pub fn create_destroy_endpoint(&mut self, result: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock(
                "POST",
                format!("/v1_1/{}/image/destroy", TEST_CLOUDINARY_CLOUD_NAME).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "result": result }).to_string())
            .expect(expected_requests)
            .create()
    }
}
