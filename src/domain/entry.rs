//! Journal entry model and partial updates

use serde::{Deserialize, Serialize};

/// A single dated journal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    /// Human-formatted creation date, e.g. "18 October 2026". Never re-stamped.
    pub date: String,
    pub location: String,
    pub content: String,
    /// Absent, empty, or a data URI (fixtures use a placeholder path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl JournalEntry {
    /// Content split into display paragraphs, one per line
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    /// The image, if one is set and non-empty
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    /// Shallow-merge a patch over this entry. `id` and `date` are kept.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
    }
}

/// Add payload: every entry field except the store-assigned `id` and `date`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub location: String,
    pub content: String,
    pub image: Option<String>,
}

/// Partial update of an entry
///
/// `id` and `date` may be present (e.g. when a whole entry is passed back),
/// but stores ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryPatch {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// `Some("")` clears the image
    #[serde(default)]
    pub image: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.content.is_none()
            && self.image.is_none()
    }
}

impl From<JournalEntry> for EntryPatch {
    fn from(entry: JournalEntry) -> Self {
        EntryPatch {
            id: Some(entry.id),
            date: Some(entry.date),
            title: Some(entry.title),
            location: Some(entry.location),
            content: Some(entry.content),
            image: Some(entry.image.unwrap_or_default()),
        }
    }
}
