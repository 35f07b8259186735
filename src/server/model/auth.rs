//! Bearer token claims.

use std::fmt;

use entity::admin_user::AdminRole;
use serde::{Deserialize, Serialize};

/// Role carried in a token.
///
/// `User` tokens are issued to devotees after OTP login, `Admin` and `Editor` tokens to back
/// office accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Editor,
}

impl Role {
    /// Whether the role may use the admin API at all.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AdminRole> for Role {
    fn from(role: AdminRole) -> Self {
        match role {
            AdminRole::Admin => Self::Admin,
            AdminRole::Editor => Self::Editor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Devotee ID for `user` tokens, admin account ID otherwise
    pub sub: i32,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}
