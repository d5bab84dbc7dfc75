//! Windowed extraction of entry text from the blob.

use crate::blob::Blob;
use crate::error::{DictError, Result};
use crate::index::Index;

/// How many consecutive entries are shown on one page.
pub const PAGE_SIZE: usize = 10;

/// Computes the byte window spanning a run of consecutive entries and
/// slices it from the blob.
///
/// Borrows the index and blob; cheap to construct per operation.
pub struct Pager<'a> {
    index: &'a Index,
    blob: &'a Blob,
    page_size: usize,
}

impl<'a> Pager<'a> {
    pub fn new(index: &'a Index, blob: &'a Blob) -> Self {
        Self::with_page_size(index, blob, PAGE_SIZE)
    }

    pub fn with_page_size(index: &'a Index, blob: &'a Blob, page_size: usize) -> Self {
        Self {
            index,
            blob,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Byte range covered by the page starting at `entry`.
    ///
    /// The window runs to the offset of the entry one page ahead, or to the
    /// end of the blob when fewer than a full page of entries remains.
    pub fn bounds(&self, entry: usize) -> Result<(u64, u64)> {
        let first = self.index.get(entry).ok_or(DictError::EntryOutOfBounds {
            index: entry,
            len: self.index.len(),
        })?;

        let low = first.offset;
        let high = match self.index.get(entry + self.page_size) {
            Some(e) => e.offset,
            None => self.blob.len(),
        };

        Ok((low, high))
    }

    /// The text of the page starting at `entry`.
    ///
    /// Always begins exactly at the entry's own boundary and never splits
    /// an entry: the window ends on another entry boundary or at the end of
    /// the blob.
    pub fn page(&self, entry: usize) -> Result<&'a str> {
        let (low, high) = self.bounds(entry)?;
        self.blob.slice_str(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexEntry;

    fn fixture() -> (Index, Blob) {
        // four entries over a 30-byte blob
        let index = Index::from_entries(vec![
            IndexEntry::new("apple", 0),
            IndexEntry::new("apple", 6),
            IndexEntry::new("banana", 12),
            IndexEntry::new("cherry", 20),
        ]);
        let blob = Blob::from_bytes(&b"apple1apple2banana1-cherry1---"[..]);
        (index, blob)
    }

    #[test]
    fn test_page_bounds() {
        let (index, blob) = fixture();
        let pager = Pager::with_page_size(&index, &blob, 2);

        assert_eq!(pager.bounds(0).unwrap(), (0, 12));
        assert_eq!(pager.bounds(1).unwrap(), (6, 20));
        // 2 + 2 runs past the index, so the window extends to the blob end
        assert_eq!(pager.bounds(2).unwrap(), (12, 30));
        assert_eq!(pager.bounds(3).unwrap(), (20, 30));
    }

    #[test]
    fn test_page_text() {
        let (index, blob) = fixture();
        let pager = Pager::with_page_size(&index, &blob, 2);

        assert_eq!(pager.page(0).unwrap(), "apple1apple2");
        assert_eq!(pager.page(2).unwrap(), "banana1-cherry1---");
    }

    #[test]
    fn test_page_larger_than_index() {
        let (index, blob) = fixture();
        let pager = Pager::new(&index, &blob); // page size 10 > 4 entries

        assert_eq!(pager.page(0).unwrap(), "apple1apple2banana1-cherry1---");
        assert_eq!(pager.page(3).unwrap(), "cherry1---");
    }

    #[test]
    fn test_entry_out_of_bounds() {
        let (index, blob) = fixture();
        let pager = Pager::with_page_size(&index, &blob, 2);

        assert!(matches!(
            pager.page(4),
            Err(DictError::EntryOutOfBounds { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_corrupt_offset_fails_safely() {
        // offset past the blob end: slicing must error, not panic
        let index = Index::from_entries(vec![
            IndexEntry::new("apple", 0),
            IndexEntry::new("zzz", 99),
        ]);
        let blob = Blob::from_bytes(&b"short"[..]);
        let pager = Pager::with_page_size(&index, &blob, 2);

        assert!(matches!(
            pager.page(1),
            Err(DictError::OffsetRange { .. })
        ));
    }
}
