//! # wort - Offline Dictionary Lookup Engine
//!
//! wort resolves a typed search term to the nearest matching entry of a
//! pre-built dictionary index and pages through the surrounding text. The
//! dictionary ships as two flat files: a sorted `term<TAB>offset` index and
//! a blob of concatenated entry texts addressed by byte offset.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Index loading and nearest-match binary search
//! - [`blob`] - The immutable dictionary text, owned or memory-mapped
//! - [`pager`] - Extraction of page windows spanning consecutive entries
//! - [`session`] - Per-reader navigation state (search, next, prev)
//! - [`stats`] - Dictionary statistics
//! - [`output`] - Terminal page rendering
//!
//! ## Quick Start
//!
//! ```ignore
//! use wort::session::Session;
//! use std::path::Path;
//!
//! let mut session = Session::open(Path::new("index.dat"), Path::new("words.dat")).unwrap();
//!
//! // Nearest-match search: a missing term lands on the closest
//! // preceding entry, an exact match on the first of its synonyms
//! let page = session.search("morgan").unwrap();
//! println!("{}", page.text);
//!
//! // Page through the surrounding entries
//! let next = session.next().unwrap();
//! println!("{}", next.text);
//! ```
//!
//! The index and blob are immutable once loaded, so everything after
//! startup is pure in-memory computation: searches are O(log n), paging is
//! O(window size), and the loaded data can be shared read-only between
//! sessions.

pub mod blob;
pub mod error;
pub mod index;
pub mod output;
pub mod pager;
pub mod session;
pub mod stats;

pub use blob::Blob;
pub use error::{DictError, Result};
pub use index::{Index, IndexEntry};
pub use pager::{PAGE_SIZE, Pager};
pub use session::{Page, Session};
