//! A single authored choice within a chooser.

use chooser_data::MatchCache;
use serde::{Deserialize, Serialize};

/// One selectable choice: a display name and the value written to shared
/// state when it is picked.
///
/// Each option owns a private [`MatchCache`] that the data source uses to
/// memoize validity checks for this option. The cache is never serialized
/// and never shared with another option.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Selection key written to shared state.
    #[serde(default)]
    pub value: String,
    #[serde(skip)]
    cache: MatchCache,
}

impl ChoiceOption {
    /// Create an option with the given label and value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            cache: MatchCache::new(),
        }
    }

    /// Replace the value, dropping memoized checks made for the old one
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cache.invalidate();
    }

    /// The option's memoization cache
    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    /// Mutable access to the cache, handed to the data source during validity checks
    pub fn cache_mut(&mut self) -> &mut MatchCache {
        &mut self.cache
    }
}

impl PartialEq for ChoiceOption {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}
