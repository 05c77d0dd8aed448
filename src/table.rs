use crate::rank::{rank, Ranking};
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts plus the running total of accepted events.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    counts: HashMap<K, u64>,
    total: u64,
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> CountTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            total: 0,
        }
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_default() += 1;
        self.total += 1;
    }

    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K: Eq + Hash + Ord> CountTable<K> {
    /// Freezes the table into its final ordering.
    pub fn into_ranking(self) -> Ranking<K> {
        rank(self.counts, self.total)
    }
}
