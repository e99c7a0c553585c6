//! Hash table engines
//!
//! `hash(key) = key mod modulus`. Both tables are fixed-size, never resize
//! and support build and lookup only.
//! - `LinearProbeTable`: open addressing, probing `(hash + step) mod slots`
//! - `ChainedTable`: one bucket per hash value, new keys prepended

use crate::errors::HashError;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Table key.
pub type HashKey = i64;

/// Home position of `key` for a given modulus.
pub fn hash(key: HashKey, modulus: usize) -> usize {
    key.rem_euclid(modulus as HashKey) as usize
}

/// Outcome of a lookup, including every position examined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub key: HashKey,
    /// `hash(key)`
    pub home: usize,
    /// Slot (linear probing) or bucket position (chaining) of the match
    pub found_at: Option<usize>,
    /// One per slot probed or bucket element examined
    pub comparisons: usize,
    /// Positions examined, in order
    pub probes: Vec<usize>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.found_at.is_some()
    }
}

/// Mean comparisons over one lookup per key; `0.0` for no keys.
fn mean_comparisons(keys: &[HashKey], search: impl Fn(HashKey) -> SearchOutcome) -> f64 {
    if keys.is_empty() {
        return 0.0;
    }
    let total: usize = keys.iter().map(|&key| search(key).comparisons).sum();
    total as f64 / keys.len() as f64
}

/// Open-addressing table with linear probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearProbeTable {
    slots: Vec<Option<HashKey>>,
    modulus: usize,
}

impl LinearProbeTable {
    /// Empty table hashing modulo its own size.
    pub fn new(slots: usize) -> Result<Self, HashError> {
        Self::with_modulus(slots, slots)
    }

    /// Empty table of `slots` slots hashing modulo `modulus`.
    pub fn with_modulus(slots: usize, modulus: usize) -> Result<Self, HashError> {
        if modulus == 0 || modulus > slots {
            return Err(HashError::InvalidModulus { modulus, slots });
        }
        Ok(Self {
            slots: vec![None; slots],
            modulus,
        })
    }

    /// Insert keys in input order.
    pub fn build(mut self, keys: &[HashKey]) -> Result<Self, HashError> {
        for &key in keys {
            self.insert(key)?;
        }
        debug!(
            keys = keys.len(),
            slots = self.slots.len(),
            "Linear probing table built"
        );
        Ok(self)
    }

    /// Store `key` in the first empty slot of its probe sequence.
    ///
    /// Returns the slot used. Keys already present are stored again.
    pub fn insert(&mut self, key: HashKey) -> Result<usize, HashError> {
        let size = self.slots.len();
        let home = hash(key, self.modulus);

        for step in 0..size {
            let slot = (home + step) % size;
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(key);
                trace!(key, slot, step, "Key placed");
                return Ok(slot);
            }
        }

        Err(HashError::TableFull { key, slots: size })
    }

    /// Follow the probe sequence until a match or an empty slot.
    ///
    /// A full table without the key is scanned once and reported absent.
    pub fn search(&self, key: HashKey) -> SearchOutcome {
        let size = self.slots.len();
        let home = hash(key, self.modulus);
        let mut probes = Vec::new();
        let mut found_at = None;

        for step in 0..size {
            let slot = (home + step) % size;
            probes.push(slot);
            match self.slots[slot] {
                None => break,
                Some(stored) if stored == key => {
                    found_at = Some(slot);
                    break;
                }
                Some(_) => {}
            }
        }

        SearchOutcome {
            key,
            home,
            found_at,
            comparisons: probes.len(),
            probes,
        }
    }

    /// Average search length: mean comparisons over a lookup of each key.
    ///
    /// Stored keys give the successful ASL, one key per home slot that is
    /// absent from the table gives the unsuccessful ASL.
    pub fn average_search_length(&self, keys: &[HashKey]) -> f64 {
        mean_comparisons(keys, |key| self.search(key))
    }

    pub fn slots(&self) -> &[Option<HashKey>] {
        &self.slots
    }

    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Separate-chaining table; each bucket is most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainedTable {
    buckets: Vec<VecDeque<HashKey>>,
}

impl ChainedTable {
    /// Empty table with `buckets` buckets, hashing modulo `buckets`.
    pub fn new(buckets: usize) -> Result<Self, HashError> {
        if buckets == 0 {
            return Err(HashError::InvalidModulus {
                modulus: 0,
                slots: 0,
            });
        }
        Ok(Self {
            buckets: vec![VecDeque::new(); buckets],
        })
    }

    /// Insert keys in input order.
    pub fn build(mut self, keys: &[HashKey]) -> Self {
        for &key in keys {
            self.insert(key);
        }
        debug!(
            keys = keys.len(),
            buckets = self.buckets.len(),
            "Chained table built"
        );
        self
    }

    /// Prepend `key` to its bucket, returning the bucket index.
    pub fn insert(&mut self, key: HashKey) -> usize {
        let bucket = hash(key, self.buckets.len());
        self.buckets[bucket].push_front(key);
        bucket
    }

    /// Scan `key`'s bucket front to back.
    pub fn search(&self, key: HashKey) -> SearchOutcome {
        let home = hash(key, self.buckets.len());
        let mut probes = Vec::new();
        let mut found_at = None;

        for (position, &stored) in self.buckets[home].iter().enumerate() {
            probes.push(position);
            if stored == key {
                found_at = Some(position);
                break;
            }
        }

        SearchOutcome {
            key,
            home,
            found_at,
            comparisons: probes.len(),
            probes,
        }
    }

    /// Average search length over a lookup of each key. Misses on an empty
    /// bucket cost nothing.
    pub fn average_search_length(&self, keys: &[HashKey]) -> f64 {
        mean_comparisons(keys, |key| self.search(key))
    }

    /// Keys of one bucket, most recent first.
    pub fn bucket(&self, index: usize) -> impl Iterator<Item = HashKey> + '_ {
        self.buckets[index].iter().copied()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total keys stored.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(VecDeque::is_empty)
    }
}
