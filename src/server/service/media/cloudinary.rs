//! Client for the Cloudinary signed upload API.

use chrono::Utc;
use dioxus_logger::tracing;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha1::{Digest, Sha1};

use crate::{
    model::admin::MediaUploadDto,
    server::{
        config::CloudinaryConfig,
        error::{content::ContentError, external::ExternalError, Error},
    },
};

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    bytes: u64,
    format: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Signed client for the Cloudinary upload and destroy APIs
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    api_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    /// Creates a client for the account in `config`
    pub fn new(http: reqwest::Client, config: &CloudinaryConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    /// Uploads an already validated image into `folder`
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        mime: &str,
        folder: &str,
    ) -> Result<MediaUploadDto, Error> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("folder", folder), ("timestamp", &timestamp)],
            &self.api_secret,
        );

        let file = Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(ExternalError::from)?;
        let form = Form::new()
            .part("file", file)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.to_string())
            .text("signature", signature);

        let response = self
            .http
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .map_err(ExternalError::from)?;
        let response = check_status(response).await?;
        let body: UploadResponse = response.json().await.map_err(ExternalError::from)?;

        tracing::info!("Uploaded {} ({} bytes)", body.public_id, body.bytes);

        Ok(MediaUploadDto {
            url: body.secure_url,
            public_id: body.public_id,
            bytes: body.bytes,
            format: body.format,
        })
    }

    /// Deletes the asset `public_id`
    pub async fn destroy(&self, public_id: &str) -> Result<(), Error> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", public_id), ("timestamp", &timestamp)],
            &self.api_secret,
        );

        let response = self
            .http
            .post(self.endpoint("destroy"))
            .form(&[
                ("public_id", public_id),
                ("api_key", &self.api_key),
                ("timestamp", &timestamp),
                ("signature", &signature),
            ])
            .send()
            .await
            .map_err(ExternalError::from)?;
        let response = check_status(response).await?;
        let body: DestroyResponse = response.json().await.map_err(ExternalError::from)?;

        match body.result.as_str() {
            "ok" => {
                tracing::info!("Deleted media {}", public_id);

                Ok(())
            }
            "not found" => Err(ContentError::not_found("Media", public_id).into()),
            other => Err(ExternalError::Cloudinary {
                status: 200,
                body: format!("unexpected destroy result {:?}", other),
            }
            .into()),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{}",
            self.api_url, self.cloud_name, action
        )
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ExternalError::Cloudinary {
        status: status.as_u16(),
        body,
    }
    .into())
}

/// Signs request parameters the way Cloudinary expects
///
/// Parameters are sorted by name, joined as `k=v&k=v`, suffixed with the API secret and
/// hashed with SHA-1.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut params = params.to_vec();
    params.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha1::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use darshan_test_utils::{
        constant::{TEST_CLOUDINARY_API_KEY, TEST_CLOUDINARY_API_SECRET, TEST_CLOUDINARY_CLOUD_NAME},
        prelude::*,
    };

    use super::*;

    fn client(test: &TestContext) -> CloudinaryClient {
        CloudinaryClient::new(
            reqwest::Client::new(),
            &CloudinaryConfig {
                api_url: test.server_url(),
                cloud_name: TEST_CLOUDINARY_CLOUD_NAME.to_string(),
                api_key: TEST_CLOUDINARY_API_KEY.to_string(),
                api_secret: TEST_CLOUDINARY_API_SECRET.to_string(),
            },
        )
    }

    #[test]
    fn sign_sorts_params_and_appends_secret() {
        // sha1("folder=kashi&timestamp=1315060510abcd")
        let mut hasher = Sha1::new();
        hasher.update(b"folder=kashi&timestamp=1315060510abcd");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(
            sign(&[("timestamp", "1315060510"), ("folder", "kashi")], "abcd"),
            expected
        );
    }

    #[test]
    fn sign_matches_known_digest() {
        assert_eq!(
            sign(&[], "abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    /// Expect the asset description from the upload response
    #[tokio::test]
    async fn upload_returns_asset() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_upload_endpoint("kashi-darshan/ghat", 1024, "png", 1)
            .build()
            .await?;

        let media = client(&test)
            .upload(vec![0x89, 0x50], "ghat.png", "image/png", "kashi-darshan")
            .await
            .unwrap();

        assert_eq!(media.public_id, "kashi-darshan/ghat");
        assert_eq!(media.format, "png");
        assert!(media.url.ends_with("kashi-darshan/ghat.png"));
        test.assert_mocks();

        Ok(())
    }

    /// Expect a Cloudinary error status to surface as an external error
    #[tokio::test]
    async fn upload_failure_is_external_error() -> Result<(), TestError> {
        let mut test = TestBuilder::new().build().await?;
        let mock = test.cloudinary().create_upload_error_endpoint(401, 1);

        let result = client(&test)
            .upload(vec![0x89, 0x50], "ghat.png", "image/png", "kashi-darshan")
            .await;

        assert!(matches!(
            result,
            Err(Error::ExternalError(ExternalError::Cloudinary { status: 401, .. }))
        ));
        mock.assert();

        Ok(())
    }

    /// Expect "not found" from destroy to be reported as missing content
    #[tokio::test]
    async fn destroy_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_cloudinary_destroy_endpoint("not found", 1)
            .build()
            .await?;

        let result = client(&test).destroy("kashi-darshan/missing").await;

        assert!(matches!(result, Err(Error::ContentError(_))));
        test.assert_mocks();

        Ok(())
    }
}
