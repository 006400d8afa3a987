//! fjour - Field journal
//!
//! Dated journal entries (title, location, text, optional inline image) with
//! threaded comments, kept in two independently persisted stores inside a
//! local journal directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod store;

pub use error::JournalError;
