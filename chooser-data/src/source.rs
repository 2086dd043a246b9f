//! The data-source contract consumed by choosers.

use crate::ContentFilter;
use crate::DataError;
use crate::MatchCache;
use crate::StateLookup;

/// A tabular source of content rows.
///
/// Implementations answer a single question: would any row survive the
/// given filters if shared state looked like `state`? The caller owns
/// `cache` and reuses it across calls for the same logical question, so the
/// source may memoize. Callers do not inspect the cache.
pub trait DataSource {
    /// Returns `true` if at least one row matches every filter.
    fn has_matching_rows(
        &self,
        filters: &[ContentFilter],
        state: &dyn StateLookup,
        cache: &mut MatchCache,
    ) -> Result<bool, DataError>;
}
