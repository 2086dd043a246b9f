//! Per-owner memoization of row-match results.

use std::collections::HashMap;

/// Memoized results of [`DataSource::has_matching_rows`](crate::DataSource::has_matching_rows).
///
/// Each cache is owned by exactly one caller (one choice option) and passed
/// by `&mut` into the data source, which decides what to store. Entries are
/// keyed by the signature of the bound filters and stamped with the data
/// source generation that produced them; a lookup under a newer generation
/// drops every stale entry. At most [`MatchCache::CAPACITY`] signatures are
/// kept; storing past that starts over from an empty map.
///
/// # Example
///
/// ```
/// use chooser_data::MatchCache;
///
/// let mut cache = MatchCache::new();
/// cache.store(1, "sig", true);
/// assert_eq!(cache.get(1, "sig"), Some(true));
///
/// // Data changed: generation 2 no longer sees the old entry
/// assert_eq!(cache.get(2, "sig"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchCache {
    generation: u64,
    results: HashMap<String, bool>,
}

impl MatchCache {
    /// Maximum number of signatures remembered at once.
    pub const CAPACITY: usize = 8;

    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `signature` if it was computed under
    /// `generation`.
    pub fn get(&mut self, generation: u64, signature: &str) -> Option<bool> {
        if generation != self.generation {
            self.results.clear();
            self.generation = generation;
            return None;
        }
        self.results.get(signature).copied()
    }

    /// Stores a result computed under `generation`.
    pub fn store(&mut self, generation: u64, signature: impl Into<String>, result: bool) {
        if generation != self.generation {
            self.results.clear();
            self.generation = generation;
        }
        let signature = signature.into();
        if self.results.len() >= Self::CAPACITY && !self.results.contains_key(&signature) {
            self.results.clear();
        }
        self.results.insert(signature, result);
    }

    /// Drops every stored result.
    pub fn invalidate(&mut self) {
        self.results.clear();
    }

    /// Returns the number of stored results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
