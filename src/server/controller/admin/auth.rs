use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        admin::{AdminLoginDto, AdminTokenDto},
        api::ErrorDto,
    },
    server::{
        controller::{admin::ADMIN_TAG, util::cache::private_no_cache},
        error::Error,
        model::app::AppState,
        service::auth::admin::AdminAuthService,
    },
};

/// Logs in a back office account
///
/// # Responses
/// - 200 (OK): An `admin` or `editor` bearer token
/// - 401 (Unauthorized): Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/admin/auth/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Logged in", body = AdminTokenDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let token = AdminAuthService::new(&state.db, &state.tokens)
        .login(body.username.trim(), &body.password)
        .await?;

    Ok((StatusCode::OK, private_no_cache(), Json(token)))
}
