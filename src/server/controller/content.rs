use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        content::{
            CityDto, DarshanTypeDto, JyotirlingaDetailDto, JyotirlingaDto, QuoteDto,
            SlotAvailabilityDto,
        },
    },
    server::{
        controller::util::cache::{private_no_cache, public_content},
        error::Error,
        model::app::AppState,
        service::content::ContentService,
    },
};

pub static CONTENT_TAG: &str = "content";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JyotirlingaQuery {
    /// Only list temples of the city with this slug
    pub city: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlotQuery {
    /// Visit date, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Lists all cities
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cities = ContentService::new(&state.db).list_cities().await?;

    Ok((StatusCode::OK, public_content(), Json(cities)))
}

/// Gets a city by slug
#[utoipa::path(
    get,
    path = "/api/cities/{slug}",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "City slug")),
    responses(
        (status = 200, description = "City", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let city = ContentService::new(&state.db).get_city(&slug).await?;

    Ok((StatusCode::OK, public_content(), Json(city)))
}

/// Lists active jyotirlingas, optionally of a single city
#[utoipa::path(
    get,
    path = "/api/jyotirlingas",
    tag = CONTENT_TAG,
    params(JyotirlingaQuery),
    responses(
        (status = 200, description = "Active jyotirlingas", body = Vec<JyotirlingaDto>),
        (status = 404, description = "City not found", body = ErrorDto)
    ),
)]
pub async fn list_jyotirlingas(
    State(state): State<AppState>,
    Query(query): Query<JyotirlingaQuery>,
) -> Result<impl IntoResponse, Error> {
    let temples = ContentService::new(&state.db)
        .list_jyotirlingas(query.city.as_deref())
        .await?;

    Ok((StatusCode::OK, public_content(), Json(temples)))
}

/// Gets a jyotirlinga with its city and bookable darshan types
#[utoipa::path(
    get,
    path = "/api/jyotirlingas/{slug}",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "Jyotirlinga slug")),
    responses(
        (status = 200, description = "Jyotirlinga detail", body = JyotirlingaDetailDto),
        (status = 404, description = "Jyotirlinga not found", body = ErrorDto)
    ),
)]
pub async fn get_jyotirlinga(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let detail = ContentService::new(&state.db).get_jyotirlinga(&slug).await?;

    Ok((StatusCode::OK, public_content(), Json(detail)))
}

/// Lists the active darshan types of a jyotirlinga, cheapest first
#[utoipa::path(
    get,
    path = "/api/jyotirlingas/{slug}/darshan-types",
    tag = CONTENT_TAG,
    params(("slug" = String, Path, description = "Jyotirlinga slug")),
    responses(
        (status = 200, description = "Darshan types", body = Vec<DarshanTypeDto>),
        (status = 404, description = "Jyotirlinga not found", body = ErrorDto)
    ),
)]
pub async fn list_darshan_types(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let darshan_types = ContentService::new(&state.db)
        .list_darshan_types(&slug)
        .await?;

    Ok((StatusCode::OK, public_content(), Json(darshan_types)))
}

/// Lists the active slots of a darshan type with their availability on a date
///
/// Availability changes with every booking, so the response is never cached publicly.
#[utoipa::path(
    get,
    path = "/api/darshan-types/{id}/slots",
    tag = CONTENT_TAG,
    params(("id" = i32, Path, description = "Darshan type ID"), SlotQuery),
    responses(
        (status = 200, description = "Slot availability", body = Vec<SlotAvailabilityDto>),
        (status = 404, description = "Darshan type not found", body = ErrorDto)
    ),
)]
pub async fn get_slot_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<SlotQuery>,
) -> Result<impl IntoResponse, Error> {
    let slots = ContentService::new(&state.db)
        .slot_availability(id, query.date)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(slots)))
}

/// Returns a random active quote
#[utoipa::path(
    get,
    path = "/api/quotes/random",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "A quote", body = QuoteDto),
        (status = 404, description = "No quotes published", body = ErrorDto)
    ),
)]
pub async fn random_quote(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let quote = ContentService::new(&state.db).random_quote().await?;

    Ok((StatusCode::OK, private_no_cache(), Json(quote)))
}
