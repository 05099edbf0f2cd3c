//! Identity-keyed merging of search result lists.

use std::collections::{HashMap, HashSet};

use beacon_core::models::TableDocument;

/// Keep `base` in its original order and append the entries of
/// `supplement` whose identity was not already present.
pub fn append_unique(
    mut base: Vec<TableDocument>,
    supplement: Vec<TableDocument>,
) -> Vec<TableDocument> {
    let mut seen: HashSet<String> = base.iter().map(TableDocument::identity).collect();
    for document in supplement {
        if seen.insert(document.identity()) {
            base.push(document);
        }
    }
    base
}

/// Merge several ranked lists into one, ranking by descending occurrence
/// count across the lists and, for equal counts, by ascending first-seen
/// position. Documents appearing in every list outrank documents appearing
/// in only one; ties keep their original order.
pub fn merge_by_occurrence(lists: &[Vec<TableDocument>]) -> Vec<TableDocument> {
    struct Entry {
        document: TableDocument,
        count: usize,
        first_seen: usize,
    }

    let mut entries: HashMap<String, Entry> = HashMap::new();
    let mut position = 0usize;

    for list in lists {
        for document in list {
            let identity = document.identity();
            entries
                .entry(identity)
                .and_modify(|e| e.count += 1)
                .or_insert(Entry {
                    document: document.clone(),
                    count: 1,
                    first_seen: position,
                });
            position += 1;
        }
    }

    let mut merged: Vec<Entry> = entries.into_values().collect();
    merged.sort_by(|a, b| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));
    merged.into_iter().map(|e| e.document).collect()
}
