//! Language selection and localized text bundles.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Languages the content is published in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// Parses a language code, unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" | "hin" | "hindi" => Self::Hi,
            _ => Self::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text available in English and optionally Hindi.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LocalizedTextDto {
    #[validate(length(min = 1, max = 5000))]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub hi: Option<String>,
}

impl LocalizedTextDto {
    /// Returns the text for `language`, falling back to English when the translation is
    /// missing or blank.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => match self.hi.as_deref() {
                Some(hi) if !hi.trim().is_empty() => hi,
                _ => &self.en,
            },
        }
    }
}
