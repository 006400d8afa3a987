//! Unsaved entry form state

use crate::domain::{EntryPatch, JournalEntry, NewEntry};
use crate::error::{JournalError, Result};

/// Form state for a new or edited entry
///
/// Lives outside the stores and is never persisted; it reaches a store only
/// when the caller submits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub location: String,
    pub content: String,
    /// Empty string means no image
    pub image: String,
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill an edit form from a stored entry
    pub fn from_entry(entry: &JournalEntry) -> Self {
        EntryDraft {
            title: entry.title.clone(),
            location: entry.location.clone(),
            content: entry.content.clone(),
            image: entry.image.clone().unwrap_or_default(),
        }
    }

    pub fn set_image(&mut self, encoded: String) {
        self.image = encoded;
    }

    pub fn clear_image(&mut self) {
        self.image.clear();
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Check the required fields and produce the store's add payload
    pub fn validate(&self) -> Result<NewEntry> {
        for (field, value) in [
            ("title", &self.title),
            ("location", &self.location),
            ("content", &self.content),
        ] {
            if value.trim().is_empty() {
                return Err(JournalError::Validation(format!(
                    "Entry {} must not be empty",
                    field
                )));
            }
        }

        Ok(NewEntry {
            title: self.title.clone(),
            location: self.location.clone(),
            content: self.content.clone(),
            image: Some(self.image.clone()),
        })
    }

    /// Validate and convert to a full-field update
    pub fn into_patch(self) -> Result<EntryPatch> {
        let new_entry = self.validate()?;
        Ok(EntryPatch {
            title: Some(new_entry.title),
            location: Some(new_entry.location),
            content: Some(new_entry.content),
            image: new_entry.image,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EntryDraft {
        EntryDraft {
            title: "T".to_string(),
            location: "L".to_string(),
            content: "C".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let new_entry = filled().validate().unwrap();
        assert_eq!(new_entry.title, "T");
        assert_eq!(new_entry.image.as_deref(), Some(""));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        for field in ["title", "location", "content"] {
            let mut draft = filled();
            match field {
                "title" => draft.title = "  ".to_string(),
                "location" => draft.location.clear(),
                _ => draft.content = "\n".to_string(),
            }
            let err = draft.validate().unwrap_err();
            assert!(err.to_string().contains(field), "field {}", field);
        }
    }

    #[test]
    fn test_from_entry_without_image() {
        let entry = JournalEntry {
            id: 1,
            title: "T".to_string(),
            date: "1 May 2026".to_string(),
            location: "L".to_string(),
            content: "C".to_string(),
            image: None,
        };
        let draft = EntryDraft::from_entry(&entry);
        assert_eq!(draft.image, "");
        assert!(!draft.has_image());
    }

    #[test]
    fn test_clear_image_then_patch() {
        let mut draft = filled();
        draft.set_image("data:image/png;base64,AA==".to_string());
        assert!(draft.has_image());
        draft.clear_image();

        let patch = draft.into_patch().unwrap();
        assert_eq!(patch.image.as_deref(), Some(""));
        assert!(patch.id.is_none());
        assert!(patch.date.is_none());
    }
}
