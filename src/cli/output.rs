//! Output formatting utilities

use crate::application::{EntryView, ImageSummary};
use crate::domain::{Comment, JournalEntry};

/// Format the entry list for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:>13}  {:<18}  {}  ({})\n",
            entry.id, entry.date, entry.title, entry.location
        ));
    }
    output
}

/// Format a list of comments, oldest first
pub fn format_comment_list(comments: &[&Comment]) -> String {
    if comments.is_empty() {
        return "No comments yet".to_string();
    }

    let mut output = String::new();
    for comment in comments {
        output.push_str(&format!("[{}] {}\n", comment.date, comment.content));
    }
    output
}

/// Format an entry detail view: header, paragraphs, image, comments
pub fn format_entry_view(view: &EntryView<'_>) -> String {
    let entry = view.entry;
    let mut output = format!(
        "# {}\n{} · {}\n\n",
        entry.title, entry.date, entry.location
    );

    for paragraph in view.paragraphs() {
        output.push_str(paragraph);
        output.push('\n');
    }

    match view.image_summary() {
        Some(ImageSummary::Inline { mime_type, bytes }) => {
            output.push_str(&format!("\nImage: {} ({} bytes)\n", mime_type, bytes));
        }
        Some(ImageSummary::Linked(target)) => {
            output.push_str(&format!("\nImage: {}\n", target));
        }
        None => {}
    }

    output.push_str(&format!("\nComments ({})\n", view.comments.len()));
    output.push_str(&format_comment_list(&view.comments));
    output
}
