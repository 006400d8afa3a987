//! Comment collection, oldest first

use crate::domain::{format_instant, Comment, IdGenerator};
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;
use crate::store::{load_slot, persist_slot, Slot, StoreSettings, COMMENTS_KEY};
use tracing::{debug, info};

/// Append-only comments mirrored to the `comments` slot
///
/// Comments keep conversation order, the reverse of entries.
#[derive(Debug)]
pub struct CommentStore<S: KeyValueStorage> {
    storage: S,
    settings: StoreSettings,
    comments: Vec<Comment>,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> CommentStore<S> {
    /// Hydrate from storage; a missing slot means no comments and is not
    /// written
    pub fn open(storage: S, settings: StoreSettings) -> Result<Self> {
        let comments = match load_slot(&storage, COMMENTS_KEY, settings.on_corrupt)? {
            Slot::Loaded(comments) => comments,
            Slot::Missing => Vec::new(),
            Slot::Reset => {
                let empty: Vec<Comment> = Vec::new();
                persist_slot(&storage, COMMENTS_KEY, &empty)?;
                empty
            }
        };
        debug!(count = comments.len(), "comment store hydrated");

        let ids = IdGenerator::seeded(comments.iter().map(|c: &Comment| c.id));
        Ok(CommentStore {
            storage,
            settings,
            comments,
            ids,
        })
    }

    /// All comments in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Comments on one entry, oldest first
    pub fn get_comments(&self, entry_id: i64) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|comment| comment.entry_id == entry_id)
            .collect()
    }

    pub fn count_for(&self, entry_id: i64) -> usize {
        self.comments
            .iter()
            .filter(|comment| comment.entry_id == entry_id)
            .count()
    }

    /// Stamp a fresh id and timestamp, then append
    ///
    /// `entry_id` is not checked against any entry collection.
    pub fn add_comment(&mut self, entry_id: i64, content: impl Into<String>) -> Result<Comment> {
        let now = self.settings.clock.now();
        let comment = Comment {
            id: self.ids.next_id(now)?,
            entry_id,
            content: content.into(),
            date: format_instant(now, &self.settings.timestamp_format)?,
        };

        self.comments.push(comment.clone());
        if let Err(e) = self.persist() {
            self.comments.pop();
            return Err(e);
        }

        info!(id = comment.id, entry_id, "comment added");
        Ok(comment)
    }

    fn persist(&self) -> Result<()> {
        persist_slot(&self.storage, COMMENTS_KEY, &self.comments)
    }
}
