//! Admin media uploads to the CDN.

pub mod cloudinary;
pub mod validation;

use dioxus_logger::tracing;

use crate::{
    model::admin::MediaUploadDto,
    server::{
        error::Error,
        service::media::{
            cloudinary::CloudinaryClient,
            validation::{validate_folder, validate_upload},
        },
    },
};

/// A file read from a multipart request
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

pub struct MediaService<'a> {
    cloudinary: &'a CloudinaryClient,
}

impl<'a> MediaService<'a> {
    /// Creates a new instance of [`MediaService`]
    pub fn new(cloudinary: &'a CloudinaryClient) -> Self {
        Self { cloudinary }
    }

    /// Validates `file` and uploads it into `folder` (or the default folder)
    pub async fn upload(
        &self,
        file: UploadedFile,
        folder: Option<&str>,
    ) -> Result<MediaUploadDto, Error> {
        let kind = validate_upload(&file.data, file.content_type.as_deref())?;
        let folder = validate_folder(folder)?;

        let file_name = file
            .file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("upload.{}", kind.extension()));

        tracing::debug!(
            "Uploading {} ({}, {} bytes) into {}",
            file_name,
            kind.mime(),
            file.data.len(),
            folder
        );

        self.cloudinary
            .upload(file.data, &file_name, kind.mime(), &folder)
            .await
    }

    /// Deletes an uploaded asset
    pub async fn delete(&self, public_id: &str) -> Result<(), Error> {
        self.cloudinary.destroy(public_id.trim()).await
    }
}
