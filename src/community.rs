use serde::Serialize;

use crate::issue_body::{ParsedDocument, SOCIAL_LINKS};

const NAME: &str = "Community name";
const ICON: &str = "Icon URL";
const LIGHTNING: &str = "Lightning";
const NOTES: &str = "Notes";

/// The record emitted for a community submission. Fields serialize in declaration order.
///
/// Only a handful of fields can be filled from an issue body, the rest are left empty for a
/// maintainer to complete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct Community {
    pub(crate) osm_id: String,
    pub(crate) name: String,
    pub(crate) area_type: String,
    pub(crate) continent: String,
    pub(crate) icon: String,
    pub(crate) lightning_tips: String,
    /// `null` when the issue has no social links at all.
    pub(crate) contact: Option<Vec<String>>,
    pub(crate) description: String,
    pub(crate) organization: String,
}

impl From<&ParsedDocument> for Community {
    fn from(document: &ParsedDocument) -> Self {
        let scalar = |key: &str| document.scalar(key).unwrap_or_default().to_string();
        Self {
            name: scalar(NAME),
            icon: scalar(ICON),
            lightning_tips: scalar(LIGHTNING),
            description: scalar(NOTES),
            contact: document.list(SOCIAL_LINKS).map(<[String]>::to_vec),
            ..Self::default()
        }
    }
}

/// How JSON is laid out on stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Format {
    /// Two-space indented, one field per line.
    #[default]
    Pretty,
    Compact,
}

impl Format {
    pub(crate) fn render<T: Serialize>(self, value: &T) -> Result<String, serde_json::Error> {
        match self {
            Self::Pretty => serde_json::to_string_pretty(value),
            Self::Compact => serde_json::to_string(value),
        }
    }
}
