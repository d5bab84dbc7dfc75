//! Parsing of the index source into an [`Index`].
//!
//! The index source is UTF-8 text, one record per line, fields separated by
//! one or more horizontal tabs: `term<TAB+>offset`. Order in the file is
//! significant and is not re-sorted here.

use crate::error::{DictError, Result};
use crate::index::{Index, IndexEntry};
use memchr::memchr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl Index {
    /// Load the index from a file on disk.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }

    /// Parse a line-oriented index source.
    ///
    /// Any malformed record aborts the whole load; a partial index is
    /// unusable because search correctness depends on the complete table.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = Vec::new();

        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            // readLine semantics: a CRLF source yields lines with a trailing \r
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let entry = parse_record(line).map_err(|reason| DictError::MalformedIndex {
                line: n + 1,
                reason,
            })?;
            entries.push(entry);
        }

        Ok(Index { entries })
    }
}

/// Parse a single `term<TAB+>offset` record.
///
/// The term is everything before the first tab; the offset is the next
/// tab-run-separated field. Fields after the offset are ignored.
fn parse_record(line: &str) -> std::result::Result<IndexEntry, String> {
    let sep = memchr(b'\t', line.as_bytes()).ok_or_else(|| "missing tab separator".to_string())?;

    let term = &line[..sep];
    let rest = line[sep..].trim_start_matches('\t');
    let field = rest.split('\t').next().unwrap_or("");

    let offset: u64 = field
        .parse()
        .map_err(|_| format!("invalid offset {field:?}"))?;

    Ok(IndexEntry::new(term, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let src = "apple\t0\nbanana\t12\ncherry\t20\n";
        let index = Index::parse(src.as_bytes()).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(0).unwrap().term, "apple");
        assert_eq!(index.get(0).unwrap().offset, 0);
        assert_eq!(index.get(2).unwrap().offset, 20);
    }

    #[test]
    fn test_parse_multiple_tabs() {
        let index = Index::parse("apple\t\t\t42\n".as_bytes()).unwrap();
        assert_eq!(index.get(0).unwrap().offset, 42);
    }

    #[test]
    fn test_parse_trailing_fields_ignored() {
        let index = Index::parse("apple\t42\tcross-reference\n".as_bytes()).unwrap();
        assert_eq!(index.get(0).unwrap().term, "apple");
        assert_eq!(index.get(0).unwrap().offset, 42);
    }

    #[test]
    fn test_parse_crlf() {
        let index = Index::parse("apple\t42\r\nbanana\t50\r\n".as_bytes()).unwrap();
        assert_eq!(index.get(1).unwrap().term, "banana");
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let index = Index::parse("apple\t42".as_bytes()).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_missing_separator() {
        let err = Index::parse("apple 42\n".as_bytes()).unwrap_err();
        match err {
            DictError::MalformedIndex { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_offset() {
        let err = Index::parse("apple\t0\nbanana\t-3\n".as_bytes()).unwrap_err();
        match err {
            DictError::MalformedIndex { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_leading_tab_is_malformed() {
        // A leading tab makes the term empty and the headword the offset field
        assert!(Index::parse("\tapple\t42\n".as_bytes()).is_err());
    }

    #[test]
    fn test_empty_line_is_malformed() {
        assert!(Index::parse("apple\t0\n\nbanana\t12\n".as_bytes()).is_err());
    }

    #[test]
    fn test_empty_source() {
        let index = Index::parse("".as_bytes()).unwrap();
        assert!(index.is_empty());
    }
}
