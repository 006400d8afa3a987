//! Background reading of image files into data URIs

use crate::domain::{DataUri, EntryDraft};
use crate::error::{JournalError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::debug;

/// Read a file and encode it as a data URI
pub fn encode_image_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        JournalError::Image(format!("Failed to read image '{}': {}", path.display(), e))
    })?;
    Ok(DataUri::from_file_bytes(path, bytes).encode())
}

/// An image read in flight
///
/// The file is read and encoded off the caller's thread; the result is
/// merged into a draft by [`ImageLoad::poll`] or [`ImageLoad::wait`].
/// Dropping the load discards whatever it produces.
pub struct ImageLoad {
    path: PathBuf,
    receiver: Receiver<Result<String>>,
}

/// State of an [`ImageLoad`] after a poll
#[derive(Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    /// The draft now holds the encoded image
    Merged,
}

impl ImageLoad {
    pub fn start(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = mpsc::channel();
        let worker_path = path.clone();

        thread::spawn(move || {
            // The receiver may be gone if the load was abandoned.
            let _ = sender.send(encode_image_file(&worker_path));
        });

        debug!(path = %path.display(), "started image load");
        ImageLoad { path, receiver }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the result into `draft` if the read has finished
    pub fn poll(&self, draft: &mut EntryDraft) -> Result<LoadStatus> {
        match self.receiver.try_recv() {
            Ok(result) => self.merge(result, draft),
            Err(TryRecvError::Empty) => Ok(LoadStatus::Pending),
            Err(TryRecvError::Disconnected) => Err(self.worker_gone()),
        }
    }

    /// Block until the read finishes, then merge into `draft`
    pub fn wait(self, draft: &mut EntryDraft) -> Result<()> {
        let result = self.receiver.recv().map_err(|_| self.worker_gone())?;
        self.merge(result, draft).map(|_| ())
    }

    fn merge(&self, result: Result<String>, draft: &mut EntryDraft) -> Result<LoadStatus> {
        let encoded = result?;
        debug!(path = %self.path.display(), bytes = encoded.len(), "image load merged");
        draft.set_image(encoded);
        Ok(LoadStatus::Merged)
    }

    fn worker_gone(&self) -> JournalError {
        JournalError::Image(format!(
            "Image read for '{}' stopped without a result",
            self.path.display()
        ))
    }
}
