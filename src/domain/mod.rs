//! Domain layer - Journal models and pure logic

pub mod clock;
pub mod comment;
pub mod data_uri;
pub mod draft;
pub mod entry;
pub mod fixtures;

pub use clock::{format_instant, Clock, FixedClock, IdGenerator, SystemClock};
pub use comment::Comment;
pub use data_uri::DataUri;
pub use draft::EntryDraft;
pub use entry::{EntryPatch, JournalEntry, NewEntry};
pub use fixtures::seed_entries;
