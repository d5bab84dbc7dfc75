/// One record of the search index: a headword and the byte offset where its
/// entry text begins in the dictionary blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub term: String,
    pub offset: u64,
}

impl IndexEntry {
    pub fn new(term: impl Into<String>, offset: u64) -> Self {
        Self {
            term: term.into(),
            offset,
        }
    }
}

/// The in-memory search index: an ordered table of [`IndexEntry`] records.
///
/// Entries are sorted non-decreasing by term (consecutive duplicates are
/// synonym runs — alternate definitions sharing a headword) with strictly
/// increasing offsets. Both properties come from the data producer and are
/// not re-checked here; an unsorted index yields wrong search results, not
/// crashes. Built once at load time, read-only afterwards.
#[derive(Debug, Default)]
pub struct Index {
    pub(crate) entries: Vec<IndexEntry>,
}

impl Index {
    /// Build an index directly from entries, bypassing the text loader.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, entry: usize) -> Option<&IndexEntry> {
        self.entries.get(entry)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }
}
