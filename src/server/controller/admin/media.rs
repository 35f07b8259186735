use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{admin::MediaUploadDto, api::ErrorDto},
    server::{
        controller::{admin::ADMIN_TAG, util::extractor::AdminAuth},
        error::{upload::UploadError, Error},
        model::app::AppState,
        service::media::{MediaService, UploadedFile},
    },
};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteMediaQuery {
    /// Cloudinary public ID of the asset
    pub public_id: String,
}

/// Uploads an image to the CDN
///
/// Multipart body with a `file` field and an optional `folder` field.
///
/// # Responses
/// - 201 (Created): The uploaded asset
/// - 400 (Bad Request): Missing or empty file, invalid folder, or a content type that does not
///   match the file
/// - 413 (Payload Too Large): The file is larger than 10 MiB
/// - 415 (Unsupported Media Type): The file is not a JPEG, PNG, GIF or WebP image
/// - 502 (Bad Gateway): Cloudinary failed
#[utoipa::path(
    post,
    path = "/api/admin/media",
    tag = ADMIN_TAG,
    request_body(content_type = "multipart/form-data", description = "`file` and optional `folder`"),
    responses(
        (status = 201, description = "Uploaded", body = MediaUploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 413, description = "File too large", body = ErrorDto),
        (status = 415, description = "Unsupported file type", body = ErrorDto),
        (status = 502, description = "Media service unavailable", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn upload_media(
    State(state): State<AppState>,
    _admin: AdminAuth,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut file = None;
    let mut folder = None;

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(UploadError::from)?.to_vec();

                file = Some(UploadedFile {
                    data,
                    file_name,
                    content_type,
                });
            }
            Some("folder") => {
                folder = Some(field.text().await.map_err(UploadError::from)?);
            }
            _ => {}
        }
    }

    let file = file.ok_or(UploadError::MissingFile)?;

    let media = MediaService::new(&state.cloudinary)
        .upload(file, folder.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(media)))
}

/// Deletes an image from the CDN
#[utoipa::path(
    delete,
    path = "/api/admin/media",
    tag = ADMIN_TAG,
    params(DeleteMediaQuery),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete media", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 502, description = "Media service unavailable", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_media(
    State(state): State<AppState>,
    admin: AdminAuth,
    Query(query): Query<DeleteMediaQuery>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    MediaService::new(&state.cloudinary)
        .delete(&query.public_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
