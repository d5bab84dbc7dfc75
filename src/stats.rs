//! Dictionary statistics.

use crate::blob::Blob;
use crate::index::Index;
use serde::Serialize;

/// Summary of a loaded dictionary.
#[derive(Debug, Clone, Serialize)]
pub struct DictStats {
    pub entries: usize,
    pub distinct_terms: usize,
    /// Entries that share their term with the previous entry
    pub synonyms: usize,
    pub blob_bytes: u64,
    pub first_term: Option<String>,
    pub last_term: Option<String>,
}

/// Compute statistics over a loaded index and blob.
pub fn collect_stats(index: &Index, blob: &Blob) -> DictStats {
    let entries = index.entries();

    let mut distinct_terms = 0;
    let mut synonyms = 0;
    let mut prev: Option<&str> = None;
    for entry in entries {
        if prev == Some(entry.term.as_str()) {
            synonyms += 1;
        } else {
            distinct_terms += 1;
        }
        prev = Some(&entry.term);
    }

    DictStats {
        entries: entries.len(),
        distinct_terms,
        synonyms,
        blob_bytes: blob.len(),
        first_term: entries.first().map(|e| e.term.clone()),
        last_term: entries.last().map(|e| e.term.clone()),
    }
}

/// Display dictionary statistics
pub fn show_stats(index: &Index, blob: &Blob, json: bool) -> anyhow::Result<()> {
    let stats = collect_stats(index, blob);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Dictionary Statistics");
    println!("=====================");
    println!();
    println!("Entries:          {}", stats.entries);
    println!("Distinct terms:   {}", stats.distinct_terms);
    println!("Synonym entries:  {}", stats.synonyms);
    println!("Text size:        {} bytes", stats.blob_bytes);

    if let (Some(first), Some(last)) = (&stats.first_term, &stats.last_term) {
        println!();
        println!("First term:       {first}");
        println!("Last term:        {last}");
    }

    Ok(())
}
