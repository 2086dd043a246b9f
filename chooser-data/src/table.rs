//! In-memory table of content rows.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use log::trace;

use crate::BoundFilter;
use crate::ContentFilter;
use crate::DataError;
use crate::DataSource;
use crate::MatchCache;
use crate::Row;
use crate::StateLookup;

/// An in-memory, append-friendly table of rows.
///
/// Every table is stamped with a generation drawn from a process-wide
/// counter, so no two tables share one. Each mutation draws a fresh
/// generation, which invalidates results memoized in any [`MatchCache`] the
/// next time it is consulted. A clone keeps its source's generation only
/// until either of them is mutated.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chooser_data::{ContentFilter, DataSource, MatchCache, Row, Table, Value};
///
/// let table = Table::from_rows([
///     Row::new().set("sheet", "animals").set("label", "cat"),
///     Row::new().set("sheet", "food").set("label", "pizza"),
/// ]);
///
/// let filters = [ContentFilter::equals("sheet", "food")];
/// let state: HashMap<String, Value> = HashMap::new();
/// let mut cache = MatchCache::new();
/// assert!(table.has_matching_rows(&filters, &state, &mut cache).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    generation: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            generation: next_generation(),
        }
    }
}

fn next_generation() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the given rows.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            generation: next_generation(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
        self.bump();
    }

    /// Replaces every row.
    pub fn replace_rows(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows = rows.into_iter().collect();
        self.bump();
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.bump();
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current generation; changes whenever the rows change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the rows matching every bound filter.
    pub fn matching<'a>(&'a self, filters: &'a [BoundFilter]) -> impl Iterator<Item = &'a Row> {
        self.rows
            .iter()
            .filter(move |row| filters.iter().all(|f| f.matches(row)))
    }

    fn bump(&mut self) {
        self.generation = next_generation();
    }
}

impl DataSource for Table {
    fn has_matching_rows(
        &self,
        filters: &[ContentFilter],
        state: &dyn StateLookup,
        cache: &mut MatchCache,
    ) -> Result<bool, DataError> {
        let bound = filters
            .iter()
            .map(|f| f.bind(state))
            .collect::<Result<Vec<_>, _>>()?;

        let signature = serde_json::to_string(&bound)
            .map_err(|e| DataError::malformed("*", e.to_string()))?;

        if let Some(hit) = cache.get(self.generation, &signature) {
            trace!("[table] cache hit {} -> {}", signature, hit);
            return Ok(hit);
        }

        let result = self.matching(&bound).next().is_some();
        trace!("[table] scanned {} rows for {} -> {}", self.rows.len(), signature, result);
        cache.store(self.generation, signature, result);
        Ok(result)
    }
}
