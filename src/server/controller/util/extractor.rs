//! Caller identification for protected routes.
//!
//! API clients send `Authorization: Bearer <token>`. The web client logs in through the OTP
//! flow and is recognized by the user id stored in its session instead.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        auth::{Claims, Role},
        session::user::SessionUserId,
    },
};

/// A logged in devotee
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// A back office account holding an `admin` or `editor` token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminAuth {
    pub admin_id: i32,
    pub role: Role,
}

impl AdminAuth {
    /// Rejects editors for operations reserved to administrators
    pub fn require_admin(&self) -> Result<(), AuthError> {
        match self.role {
            Role::Admin => Ok(()),
            role => Err(AuthError::Forbidden(role.to_string())),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(claims) = bearer_claims(parts, state)? {
            return match claims.role {
                Role::User => Ok(Self {
                    user_id: claims.sub,
                }),
                role => Err(AuthError::Forbidden(role.to_string()).into()),
            };
        }

        let Some(session) = parts.extensions.get::<Session>() else {
            return Err(AuthError::MissingCredentials.into());
        };

        match SessionUserId::get(session).await? {
            Some(user_id) => Ok(Self { user_id }),
            None => Err(AuthError::MissingCredentials.into()),
        }
    }
}

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(claims) = bearer_claims(parts, state)? else {
            return Err(AuthError::MissingCredentials.into());
        };

        if !claims.role.is_staff() {
            return Err(AuthError::Forbidden(claims.role.to_string()).into());
        }

        Ok(Self {
            admin_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Verifies the bearer token if the request carries one
fn bearer_claims(parts: &Parts, state: &AppState) -> Result<Option<Claims>, AuthError> {
    let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("malformed authorization header".to_string()))?;

    state.tokens.verify(token).map(Some)
}
