// Reading list persistence: a single JSON document `{"books": [...]}` at a
// path chosen by the caller. Every mutation is a full read-modify-write of
// that document.
//
// There is no locking. The store assumes one user running one process at a
// time; two overlapping invocations can lose an append.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(
        "No reading list found. Please run the search command to add books to your reading list."
    )]
    NotFound(PathBuf),
    #[error("no book at position {index}, the reading list has {len} book(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of the reading list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingList {
    pub books: Vec<BookRecord>,
}

/// Reading list bound to one file.
#[derive(Debug, Clone)]
pub struct ReadingListStore {
    path: PathBuf,
}

impl ReadingListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty reading list if either is
    /// missing. Leaves an existing document untouched.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if !self.path.exists() {
            log::debug!("creating empty reading list at {}", self.path.display());
            self.write_document(&ReadingList::default())?;
        }
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<BookRecord>, StoreError> {
        Ok(self.read_document()?.books)
    }

    pub fn append(&self, book: &BookRecord) -> Result<(), StoreError> {
        let mut doc = self.read_document()?;
        doc.books.push(book.clone());
        self.write_document(&doc)?;
        log::info!(
            "saved \"{}\" ({} book(s) in reading list)",
            book.display_title(),
            doc.books.len()
        );
        Ok(())
    }

    /// Remove the entry at a 0-based `index` and return it.
    pub fn remove_at(&self, index: usize) -> Result<BookRecord, StoreError> {
        let mut doc = self.read_document()?;
        if index >= doc.books.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: doc.books.len(),
            });
        }
        let removed = doc.books.remove(index);
        self.write_document(&doc)?;
        log::info!("removed \"{}\" from reading list", removed.display_title());
        Ok(removed)
    }

    pub(crate) fn read_document(&self) -> Result<ReadingList, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    /// Replace the whole document. Written to a sibling file first and then
    /// renamed, so the target never holds a partial or stale tail.
    pub(crate) fn write_document(&self, doc: &ReadingList) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}
