//! Error types for the dictionary engine.

use std::str::Utf8Error;
use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, DictError>;

/// Everything that can go wrong while loading or querying a dictionary.
///
/// Loading errors ([`MalformedIndex`](DictError::MalformedIndex), [`Io`](DictError::Io))
/// abort startup entirely; a partial index is unusable. Errors raised during a live
/// session leave the navigation state untouched. Nothing here is retryable — all
/// operations are deterministic over immutable data.
#[derive(Error, Debug)]
pub enum DictError {
    /// A record in the index source could not be parsed
    #[error("malformed index record at line {line}: {reason}")]
    MalformedIndex { line: usize, reason: String },

    /// Search was attempted before any entries were loaded
    #[error("search attempted on an empty index")]
    EmptyIndex,

    /// A byte range points outside the dictionary blob
    #[error("byte range {lo}..{hi} is outside the blob (length {len})")]
    OffsetRange { lo: u64, hi: u64, len: u64 },

    /// An entry number outside the index was requested
    #[error("entry {index} out of bounds for index of {len} entries")]
    EntryOutOfBounds { index: usize, len: usize },

    /// A sliced byte range does not decode as UTF-8
    #[error("entry text at {lo}..{hi} is not valid UTF-8: {source}")]
    CorruptData {
        lo: u64,
        hi: u64,
        source: Utf8Error,
    },

    /// Page navigation was requested before the first search
    #[error("no entry displayed yet; search before paging")]
    NoCurrentEntry,

    /// I/O error while reading the index or blob source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
