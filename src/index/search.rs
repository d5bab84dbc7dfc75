//! Nearest-match term search over the index.

use crate::error::{DictError, Result};
use crate::index::Index;
use std::cmp::Ordering;

impl Index {
    /// Find the entry for `term`, or the nearest entry preceding it.
    ///
    /// Comparison is exact lexicographic byte comparison — no case folding,
    /// no locale collation. An exact match lands on the first entry of its
    /// synonym run; a missing term resolves to the closest entry that sorts
    /// before it. The result is always a valid entry number for a non-empty
    /// index; searching an empty index is a caller error.
    ///
    /// The bound adjustment is deliberately asymmetric (`hi = mid - 1` on
    /// the low side) and the converged position is then repaired by the
    /// synonym rewind and a single back-off step. A missing term that
    /// converges inside a synonym run is rewound to the run's first entry
    /// even though a later entry of the run sorts closer; this matches the
    /// shipped behavior of the algorithm and changing it would change
    /// observable results.
    pub fn search(&self, term: &str) -> Result<usize> {
        if self.entries.is_empty() {
            return Err(DictError::EmptyIndex);
        }

        let len = self.entries.len() as isize;
        let mut lo: isize = 0;
        let mut hi: isize = len;

        while lo < hi {
            let mid = (lo + hi) / 2;

            match term.cmp(self.entries[mid as usize].term.as_str()) {
                Ordering::Less => hi = mid - 1,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => {
                    lo = mid;
                    hi = mid;
                }
            }
        }

        // lo may have converged to len (term sorts after every entry) or
        // one short of the match; clamp before touching entries[lo]
        let mut lo = lo.clamp(0, len - 1) as usize;

        // rewind to the first entry of a synonym run
        while lo > 0 && self.entries[lo].term == self.entries[lo - 1].term {
            lo -= 1;
        }

        // step back once when the converged entry sorts after the term
        if lo > 0 && term < self.entries[lo].term.as_str() {
            lo -= 1;
        }

        Ok(lo)
    }
}
