//! The dictionary blob: the concatenated entry texts, addressed by byte offset.

use crate::error::{DictError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Immutable byte store holding the full dictionary text.
///
/// Entry boundaries are implied entirely by the index offsets; the blob
/// itself has no framing. Loaded once at startup, read-only afterwards, so
/// sharing it across readers needs no synchronization.
pub struct Blob {
    data: BlobData,
}

enum BlobData {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl Blob {
    /// Wrap an in-memory byte buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: BlobData::Owned(bytes.into()),
        }
    }

    /// Memory-map the blob file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;

        // zero-length maps are not portable
        if file.metadata()?.len() == 0 {
            return Ok(Self::from_bytes(Vec::new()));
        }

        let map = unsafe { Mmap::map(&file)? };
        Ok(Self {
            data: BlobData::Mapped(map),
        })
    }

    fn bytes(&self) -> &[u8] {
        match &self.data {
            BlobData::Owned(v) => v,
            BlobData::Mapped(m) => m,
        }
    }

    pub fn len(&self) -> u64 {
        self.bytes().len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// Return the half-open byte range `[lo, hi)`.
    ///
    /// `hi` is clamped to the blob length; a `lo` past the end or an
    /// inverted range means the offsets upstream are corrupt.
    pub fn slice(&self, lo: u64, hi: u64) -> Result<&[u8]> {
        let len = self.len();
        if lo > hi || lo > len {
            return Err(DictError::OffsetRange { lo, hi, len });
        }

        let hi = hi.min(len);
        Ok(&self.bytes()[lo as usize..hi as usize])
    }

    /// Return the byte range decoded as UTF-8.
    ///
    /// The data producer guarantees index offsets land on character
    /// boundaries; a decode failure therefore means corrupt data and is
    /// fatal, not retryable.
    pub fn slice_str(&self, lo: u64, hi: u64) -> Result<&str> {
        let raw = self.slice(lo, hi)?;
        std::str::from_utf8(raw).map_err(|source| DictError::CorruptData { lo, hi, source })
    }
}
