//! Frequency ranking for suggestions.

use crate::data_structures::{merge_sort_by, WordFrequency};

/// Returns at most `limit` entries, most frequent first.
///
/// Entries with equal frequency keep their input order, so ranking the output
/// of a trie prefix search is reproducible.
pub fn rank_by_frequency(entries: Vec<WordFrequency>, limit: usize) -> Vec<WordFrequency> {
    let mut ranked = merge_sort_by(entries, &mut |a: &WordFrequency, b: &WordFrequency| {
        b.1.total_cmp(&a.1)
    });
    ranked.truncate(limit);
    ranked
}
