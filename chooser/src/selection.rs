//! Current-selection resolution, default adoption and click handling.

use log::debug;

use crate::state::StateStore;

/// Reads and writes a chooser's selection through its pair of state keys.
///
/// Selection is a two-phase protocol per render pass: the pure steps
/// ([`current`](Self::current), [`default_candidate`](Self::default_candidate))
/// decide what should be selected, and [`commit_default`](Self::commit_default)
/// performs the one write. Both keys are always written in a single
/// [`StateStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    primary: String,
    secondary: String,
}

impl SelectionController {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// The non-empty value held under the primary key, if any.
    pub fn current(&self, state: &StateStore) -> Option<String> {
        if self.primary.is_empty() {
            return None;
        }
        state
            .get(&self.primary)
            .filter(|v| !v.is_empty())
            .map(|v| v.text())
    }

    /// The value to adopt when nothing is selected yet.
    ///
    /// `candidates` are `(value, valid)` pairs in option order. Returns the
    /// first valid, non-empty value, or `None` when the primary key is
    /// unconfigured or `current` is already resolved.
    pub fn default_candidate<'o>(
        &self,
        current: Option<&str>,
        candidates: impl IntoIterator<Item = (&'o str, bool)>,
    ) -> Option<&'o str> {
        if self.primary.is_empty() || current.is_some() {
            return None;
        }
        candidates
            .into_iter()
            .find(|(value, valid)| *valid && !value.is_empty())
            .map(|(value, _)| value)
    }

    /// Write an adopted default to both keys.
    pub fn commit_default(&self, state: &StateStore, value: &str) {
        debug!("[selection] adopting default {:?} for {}", value, self.primary);
        state.update(self.updates(value));
    }

    /// Write a user pick to both keys.
    pub fn select(&self, state: &StateStore, value: &str) {
        debug!("[selection] {} = {:?}", self.primary, value);
        state.update(self.updates(value));
    }

    /// Highlighted if it is the current value, or if nothing is current and
    /// it is the first option. Visual only.
    pub fn is_highlighted(value: &str, index: usize, current: Option<&str>) -> bool {
        match current {
            Some(current) => value == current,
            None => index == 0,
        }
    }

    fn updates(&self, value: &str) -> Vec<(String, String)> {
        [&self.primary, &self.secondary]
            .into_iter()
            .filter(|key| !key.is_empty())
            .map(|key| (key.clone(), value.to_string()))
            .collect()
    }
}
