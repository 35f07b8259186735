//! Content management. Editors may create and update, deletes require the `admin` role.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        admin::{
            UpsertCityDto, UpsertDarshanTypeDto, UpsertJyotirlingaDto, UpsertQuoteDto,
            UpsertTimeSlotDto,
        },
        api::ErrorDto,
        content::{CityDto, DarshanTypeDto, JyotirlingaDto, QuoteDto, TimeSlotDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::extractor::AdminAuth},
        error::Error,
        model::app::AppState,
        service::content::admin::ContentAdminService,
    },
};

/// Creates a city
#[utoipa::path(
    post,
    path = "/api/admin/cities",
    tag = ADMIN_TAG,
    request_body = UpsertCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_city(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<UpsertCityDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let created = ContentAdminService::new(&state.db)
        .create_city(body)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a city
#[utoipa::path(
    put,
    path = "/api/admin/cities/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "City ID")),
    request_body = UpsertCityDto,
    responses(
        (status = 200, description = "City updated", body = CityDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn update_city(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpsertCityDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let updated = ContentAdminService::new(&state.db)
        .update_city(id, body)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Deletes a city
#[utoipa::path(
    delete,
    path = "/api/admin/cities/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete content", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 409, description = "City is still referenced", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_city(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    ContentAdminService::new(&state.db)
        .delete_city(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a jyotirlinga
#[utoipa::path(
    post,
    path = "/api/admin/jyotirlingas",
    tag = ADMIN_TAG,
    request_body = UpsertJyotirlingaDto,
    responses(
        (status = 201, description = "Jyotirlinga created", body = JyotirlingaDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_jyotirlinga(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<UpsertJyotirlingaDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let created = ContentAdminService::new(&state.db)
        .create_jyotirlinga(body)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a jyotirlinga
#[utoipa::path(
    put,
    path = "/api/admin/jyotirlingas/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Jyotirlinga ID")),
    request_body = UpsertJyotirlingaDto,
    responses(
        (status = 200, description = "Jyotirlinga updated", body = JyotirlingaDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "Jyotirlinga not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn update_jyotirlinga(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpsertJyotirlingaDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let updated = ContentAdminService::new(&state.db)
        .update_jyotirlinga(id, body)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Deletes a jyotirlinga
#[utoipa::path(
    delete,
    path = "/api/admin/jyotirlingas/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Jyotirlinga ID")),
    responses(
        (status = 204, description = "Jyotirlinga deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete content", body = ErrorDto),
        (status = 404, description = "Jyotirlinga not found", body = ErrorDto),
        (status = 409, description = "Jyotirlinga is still referenced", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_jyotirlinga(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    ContentAdminService::new(&state.db)
        .delete_jyotirlinga(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a darshan type
#[utoipa::path(
    post,
    path = "/api/admin/darshan-types",
    tag = ADMIN_TAG,
    request_body = UpsertDarshanTypeDto,
    responses(
        (status = 201, description = "Darshan type created", body = DarshanTypeDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_darshan_type(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<UpsertDarshanTypeDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let created = ContentAdminService::new(&state.db)
        .create_darshan_type(body)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a darshan type
#[utoipa::path(
    put,
    path = "/api/admin/darshan-types/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Darshan type ID")),
    request_body = UpsertDarshanTypeDto,
    responses(
        (status = 200, description = "Darshan type updated", body = DarshanTypeDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "Darshan type not found", body = ErrorDto),
        (status = 409, description = "Slug already taken", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn update_darshan_type(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpsertDarshanTypeDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let updated = ContentAdminService::new(&state.db)
        .update_darshan_type(id, body)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Deletes a darshan type
#[utoipa::path(
    delete,
    path = "/api/admin/darshan-types/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Darshan type ID")),
    responses(
        (status = 204, description = "Darshan type deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete content", body = ErrorDto),
        (status = 404, description = "Darshan type not found", body = ErrorDto),
        (status = 409, description = "Darshan type is still referenced", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_darshan_type(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    ContentAdminService::new(&state.db)
        .delete_darshan_type(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a time slot
#[utoipa::path(
    post,
    path = "/api/admin/time-slots",
    tag = ADMIN_TAG,
    request_body = UpsertTimeSlotDto,
    responses(
        (status = 201, description = "Time slot created", body = TimeSlotDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_time_slot(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<UpsertTimeSlotDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let created = ContentAdminService::new(&state.db)
        .create_time_slot(body)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a time slot
#[utoipa::path(
    put,
    path = "/api/admin/time-slots/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Time slot ID")),
    request_body = UpsertTimeSlotDto,
    responses(
        (status = 200, description = "Time slot updated", body = TimeSlotDto),
        (status = 400, description = "Invalid request or missing parent", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "Time slot not found", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn update_time_slot(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpsertTimeSlotDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let updated = ContentAdminService::new(&state.db)
        .update_time_slot(id, body)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Deletes a time slot
#[utoipa::path(
    delete,
    path = "/api/admin/time-slots/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Time slot ID")),
    responses(
        (status = 204, description = "Time slot deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete content", body = ErrorDto),
        (status = 404, description = "Time slot not found", body = ErrorDto),
        (status = 409, description = "Time slot is still referenced", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_time_slot(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    ContentAdminService::new(&state.db)
        .delete_time_slot(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Creates a quote
#[utoipa::path(
    post,
    path = "/api/admin/quotes",
    tag = ADMIN_TAG,
    request_body = UpsertQuoteDto,
    responses(
        (status = 201, description = "Quote created", body = QuoteDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn create_quote(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(body): Json<UpsertQuoteDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let created = ContentAdminService::new(&state.db)
        .create_quote(body)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Updates a quote
#[utoipa::path(
    put,
    path = "/api/admin/quotes/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    request_body = UpsertQuoteDto,
    responses(
        (status = 200, description = "Quote updated", body = QuoteDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not a staff account", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
    ),
    security(("bearer" = []))
)]
pub async fn update_quote(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<i32>,
    Json(body): Json<UpsertQuoteDto>,
) -> Result<impl IntoResponse, Error> {
    body.validate()?;

    let updated = ContentAdminService::new(&state.db)
        .update_quote(id, body)
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Deletes a quote
#[utoipa::path(
    delete,
    path = "/api/admin/quotes/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Quote ID")),
    responses(
        (status = 204, description = "Quote deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Only administrators may delete content", body = ErrorDto),
        (status = 404, description = "Quote not found", body = ErrorDto),
        (status = 409, description = "Quote is still referenced", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    admin: AdminAuth,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    admin.require_admin()?;

    ContentAdminService::new(&state.db)
        .delete_quote(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
