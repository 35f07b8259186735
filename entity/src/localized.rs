//! JSON column types shared by the content entities.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Text bundle stored as a JSON column, English is always present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, hi: Option<String>) -> Self {
        Self { en: en.into(), hi }
    }
}

/// Ordered list of media URLs for a temple gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MediaGallery(pub Vec<String>);
