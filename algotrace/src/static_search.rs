//! Static search tables
//!
//! A fixed array of keyed records that is looked up but never modified.
//! - [`sequential`]: scan a [`StaticTable`] front to back in stored order
//! - [`binary`]: halve the range of a [`SortedTable`], `mid = (low + high) / 2`
//!
//! Each key comparison emits one [`LookupStep`], so a trace's length is its
//! comparison count.

use crate::bst::{Entry, Key};
use crate::trace::{LookupStep, Trace, Verdict};
use serde::Serialize;
use tracing::debug;

/// Records in the order they were stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticTable<V> {
    records: Vec<Entry<V>>,
}

impl<V> StaticTable<V> {
    pub fn new(records: Vec<Entry<V>>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Entry<V>] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Entry<V>> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort by key. Records with equal keys keep their stored order.
    pub fn into_sorted(mut self) -> SortedTable<V> {
        self.records.sort_by_key(|entry| entry.key);
        SortedTable {
            records: self.records,
        }
    }
}

impl<V> FromIterator<Entry<V>> for StaticTable<V> {
    fn from_iter<I: IntoIterator<Item = Entry<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Records in ascending key order, the precondition of [`binary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortedTable<V> {
    records: Vec<Entry<V>>,
}

impl<V> SortedTable<V> {
    pub fn records(&self) -> &[Entry<V>] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Entry<V>> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Compare `key` against every record from index 0 until a match.
pub fn sequential<V>(table: &StaticTable<V>, key: Key) -> Trace<LookupStep> {
    let mut trace = Trace::new();

    for (index, entry) in table.records.iter().enumerate() {
        let verdict = if entry.key == key {
            Verdict::Match
        } else {
            Verdict::Mismatch
        };
        trace.push(LookupStep {
            index,
            key: entry.key,
            verdict,
            range: None,
        });
        if verdict == Verdict::Match {
            break;
        }
    }

    debug!(key, comparisons = trace.len(), "Sequential search complete");
    trace
}

/// Binary search over inclusive bounds `[low, high]`.
///
/// A miss ends once the bounds cross; the path is at most
/// `floor(log2(n)) + 1` records long.
pub fn binary<V>(table: &SortedTable<V>, key: Key) -> Trace<LookupStep> {
    let mut trace = Trace::new();
    // Exclusive upper bound; the inclusive high is `end - 1`
    let (mut low, mut end) = (0, table.records.len());

    while low < end {
        let high = end - 1;
        let mid = (low + high) / 2;
        let stored = table.records[mid].key;
        let verdict = if stored == key {
            Verdict::Match
        } else if stored < key {
            Verdict::Right
        } else {
            Verdict::Left
        };
        trace.push(LookupStep {
            index: mid,
            key: stored,
            verdict,
            range: Some((low, high)),
        });

        match verdict {
            Verdict::Match => break,
            Verdict::Right => low = mid + 1,
            _ => end = mid,
        }
    }

    debug!(key, comparisons = trace.len(), "Binary search complete");
    trace
}
