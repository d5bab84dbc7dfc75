//! A single reader's view of the dictionary: loaded data plus the current
//! page position.

use crate::blob::Blob;
use crate::error::{DictError, Result};
use crate::index::Index;
use crate::pager::{PAGE_SIZE, Pager};
use std::path::Path;

/// A page of dictionary text as returned by the session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Number of the first entry on the page
    pub entry: usize,
    /// Text spanning the page's run of entries
    pub text: String,
}

/// One lookup session over an immutable index and blob.
///
/// Owns the navigation state (`current`); the index and blob themselves are
/// read-only, so a multi-session adaptation would share those and keep one
/// `Session` per reader. All mutation happens through [`show`](Session::show):
/// on any failure the current position is left unchanged.
pub struct Session {
    index: Index,
    blob: Blob,
    page_size: usize,
    current: Option<usize>,
}

impl Session {
    pub fn new(index: Index, blob: Blob) -> Self {
        Self::with_page_size(index, blob, PAGE_SIZE)
    }

    pub fn with_page_size(index: Index, blob: Blob, page_size: usize) -> Self {
        Self {
            index,
            blob,
            page_size,
            current: None,
        }
    }

    /// Load a session from the two bundled data files.
    pub fn open(index_path: &Path, data_path: &Path) -> Result<Self> {
        Ok(Self::new(Index::open(index_path)?, Blob::open(data_path)?))
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn blob(&self) -> &Blob {
        &self.blob
    }

    /// First entry of the currently displayed page, if any page has been
    /// shown yet.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Search for a term and display the page at the nearest match.
    pub fn search(&mut self, term: &str) -> Result<Page> {
        let entry = self.index.search(term)?;
        self.show(entry)
    }

    /// Display the page starting at an explicit entry.
    pub fn show(&mut self, entry: usize) -> Result<Page> {
        let pager = Pager::with_page_size(&self.index, &self.blob, self.page_size);
        let text = pager.page(entry)?.to_owned();

        self.current = Some(entry);
        Ok(Page { entry, text })
    }

    /// Advance one page, staying on the last page at the end.
    pub fn next(&mut self) -> Result<Page> {
        let current = self.current.ok_or(DictError::NoCurrentEntry)?;
        let last = self.index.len().saturating_sub(self.page_size);

        let target = if current >= last {
            last
        } else {
            current + self.page_size
        };
        self.show(target)
    }

    /// Go back one page, staying on the first page at the start.
    pub fn prev(&mut self) -> Result<Page> {
        let current = self.current.ok_or(DictError::NoCurrentEntry)?;
        self.show(current.saturating_sub(self.page_size))
    }
}
