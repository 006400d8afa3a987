//! Comment use case

use crate::domain::{Comment, JournalEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::KeyValueStorage;
use crate::store::CommentStore;

/// Posts replies to a displayed entry
pub struct CommentService<'a, S: KeyValueStorage> {
    comments: &'a mut CommentStore<S>,
}

impl<'a, S: KeyValueStorage> CommentService<'a, S> {
    pub fn new(comments: &'a mut CommentStore<S>) -> Self {
        CommentService { comments }
    }

    /// Reject blank text, otherwise append a comment on `entry`
    pub fn post(&mut self, entry: &JournalEntry, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(JournalError::Validation(
                "Comment must not be empty".to_string(),
            ));
        }
        self.comments.add_comment(entry.id, text)
    }
}
