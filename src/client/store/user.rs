use crate::model::{i18n::Language, user::UserDto};

/// Logged in user shared through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether `/api/auth/me` has answered yet
    pub fetched: bool,
}

/// Display language shared through context
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LanguageState(pub Language);

impl LanguageState {
    pub fn toggled(self) -> Self {
        match self.0 {
            Language::En => Self(Language::Hi),
            Language::Hi => Self(Language::En),
        }
    }
}
