//! Application layer - Use cases and orchestration

pub mod edit_entry;
pub mod init;
pub mod journal;
pub mod manage_config;
pub mod new_entry;
pub mod post_comment;
pub mod view_entry;

pub use edit_entry::EditEntryService;
pub use journal::Journal;
pub use manage_config::ConfigService;
pub use new_entry::NewEntryService;
pub use post_comment::CommentService;
pub use view_entry::{EntryView, ImageSummary};
