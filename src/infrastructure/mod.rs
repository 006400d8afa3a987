//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod image_load;
pub mod repository;
pub mod storage;

pub use config::{Config, CorruptPolicy};
pub use image_load::{encode_image_file, ImageLoad, LoadStatus};
pub use repository::{FileSystemStorage, JournalRepository};
pub use storage::{KeyValueStorage, MemoryStorage};
