// Book data model: a `BookRecord` is one catalog "volume" item exactly as the
// Google Books API returns it. Only the display fields are typed; everything
// else is carried in `extra` so saving a record never drops information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const UNKNOWN_TITLE: &str = "Unknown title";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";
pub const UNKNOWN_PUBLISHER: &str = "Unknown publisher";

/// A single catalog entry. Serialized in the same shape it was received in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The descriptive part of a volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BookRecord {
    /// Build a record from its display fields. Mostly useful for tests and
    /// for callers that do not go through the catalog.
    pub fn new(
        title: Option<&str>,
        authors: Option<Vec<&str>>,
        publisher: Option<&str>,
    ) -> Self {
        Self {
            volume_info: VolumeInfo {
                title: title.map(String::from),
                authors: authors.map(|a| a.into_iter().map(String::from).collect()),
                publisher: publisher.map(String::from),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    pub fn display_title(&self) -> &str {
        self.volume_info.title.as_deref().unwrap_or(UNKNOWN_TITLE)
    }

    /// Authors joined with `,`, or the placeholder when the field is absent.
    pub fn display_authors(&self) -> String {
        match &self.volume_info.authors {
            Some(authors) => authors.join(","),
            None => UNKNOWN_AUTHOR.to_string(),
        }
    }

    pub fn display_publisher(&self) -> &str {
        self.volume_info
            .publisher
            .as_deref()
            .unwrap_or(UNKNOWN_PUBLISHER)
    }
}
