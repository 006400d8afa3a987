//! Read entry use case

use crate::application::Journal;
use crate::domain::{Comment, DataUri, JournalEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::KeyValueStorage;

/// What a detail view shows for an entry's image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSummary {
    /// Inline data URI
    Inline { mime_type: String, bytes: usize },
    /// Any other reference, e.g. a placeholder path
    Linked(String),
}

/// An entry together with its comments
#[derive(Debug)]
pub struct EntryView<'a> {
    pub entry: &'a JournalEntry,
    pub comments: Vec<&'a Comment>,
}

impl<'a> EntryView<'a> {
    pub fn load<S: KeyValueStorage>(journal: &'a Journal<S>, id: i64) -> Result<Self> {
        let entry = journal
            .entries()
            .get_entry(id)
            .ok_or(JournalError::EntryNotFound(id))?;

        Ok(EntryView {
            entry,
            comments: journal.comments().get_comments(id),
        })
    }

    pub fn paragraphs(&self) -> Vec<&'a str> {
        self.entry.paragraphs()
    }

    pub fn image_summary(&self) -> Option<ImageSummary> {
        let image = self.entry.image()?;
        if DataUri::is_data_uri(image) {
            match DataUri::parse(image) {
                Ok(uri) => Some(ImageSummary::Inline {
                    bytes: uri.len(),
                    mime_type: uri.mime_type,
                }),
                Err(_) => Some(ImageSummary::Linked("(unreadable data URI)".to_string())),
            }
        } else {
            Some(ImageSummary::Linked(image.to_string()))
        }
    }

    /// Decode an inline image for export
    pub fn decode_image(&self) -> Result<DataUri> {
        let image = self.entry.image().ok_or_else(|| {
            JournalError::Image(format!("Entry {} has no image", self.entry.id))
        })?;
        DataUri::parse(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewEntry;
    use crate::infrastructure::MemoryStorage;
    use crate::store::StoreSettings;

    fn journal() -> Journal<MemoryStorage> {
        Journal::open(MemoryStorage::new(), StoreSettings::default()).unwrap()
    }

    #[test]
    fn test_view_collects_comments_in_order() {
        let mut journal = journal();
        journal.comments_mut().add_comment(1, "first").unwrap();
        journal.comments_mut().add_comment(2, "other").unwrap();
        journal.comments_mut().add_comment(1, "second").unwrap();

        let view = EntryView::load(&journal, 1).unwrap();
        let texts: Vec<&str> = view.comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(view.paragraphs()[0], view.entry.content.split('\n').next().unwrap());
    }

    #[test]
    fn test_view_missing_entry() {
        let journal = journal();
        assert!(matches!(
            EntryView::load(&journal, 99),
            Err(JournalError::EntryNotFound(99))
        ));
    }

    #[test]
    fn test_placeholder_image_is_linked() {
        let journal = journal();
        let view = EntryView::load(&journal, 3).unwrap();
        assert_eq!(
            view.image_summary(),
            Some(ImageSummary::Linked(
                "/placeholder.svg?height=400&width=600".to_string()
            ))
        );
        assert!(view.decode_image().is_err());
    }

    #[test]
    fn test_inline_image_summary_and_decode() {
        let mut journal = journal();
        let entry = journal
            .entries_mut()
            .add_entry(NewEntry {
                title: "T".to_string(),
                location: "L".to_string(),
                content: "C".to_string(),
                image: Some(DataUri::new("image/png", vec![1, 2, 3, 4]).encode()),
            })
            .unwrap();

        let view = EntryView::load(&journal, entry.id).unwrap();
        assert_eq!(
            view.image_summary(),
            Some(ImageSummary::Inline {
                mime_type: "image/png".to_string(),
                bytes: 4
            })
        );
        assert_eq!(view.decode_image().unwrap().data, vec![1, 2, 3, 4]);
    }
}
