//! Helpers shared by the integration tests.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart},
    http::{header, Request},
    response::Response,
};
use darshan_test_utils::{
    constant::{
        TEST_CLOUDINARY_API_KEY, TEST_CLOUDINARY_API_SECRET, TEST_CLOUDINARY_CLOUD_NAME,
        TEST_JWT_EXPIRY_HOURS, TEST_JWT_SECRET, TEST_OTP_PROVIDER_KEY,
    },
    TestContext,
};
use kashi_darshan::server::{
    config::CloudinaryConfig,
    model::app::AppState,
    service::{
        auth::{otp::OtpClient, token::TokenService},
        media::cloudinary::CloudinaryClient,
    },
};
use serde::de::DeserializeOwned;

static MULTIPART_BOUNDARY: &str = "kashi-darshan-test-boundary";

/// Extension trait for TestContext to build an AppState pointed at the mock server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let url = self.server_url();
        let http = reqwest::Client::new();

        AppState {
            db: self.db.clone(),
            tokens: TokenService::new(TEST_JWT_SECRET, TEST_JWT_EXPIRY_HOURS),
            otp_client: OtpClient::new(http.clone(), &url, TEST_OTP_PROVIDER_KEY),
            cloudinary: CloudinaryClient::new(
                http,
                &CloudinaryConfig {
                    api_url: url,
                    cloud_name: TEST_CLOUDINARY_CLOUD_NAME.to_string(),
                    api_key: TEST_CLOUDINARY_API_KEY.to_string(),
                    api_secret: TEST_CLOUDINARY_API_SECRET.to_string(),
                },
            ),
        }
    }
}

/// Reads a JSON response body
pub async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}

/// Reads a raw response body
pub async fn raw_body(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}

/// Builds a multipart extractor holding a `file` field and an optional `folder` field
pub async fn multipart_upload(
    file_name: &str,
    content_type: &str,
    data: &[u8],
    folder: Option<&str>,
) -> Multipart {
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");

    if let Some(folder) = folder {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"folder\"\r\n\r\n");
        body.extend_from_slice(folder.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/media")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        )
        .body(Body::from(body))
        .expect("Failed to build multipart request");

    Multipart::from_request(request, &())
        .await
        .expect("Failed to extract multipart body")
}
