//! Per-option validity against the data source.

use chooser_data::{ContentFilter, DataSource};
use log::{trace, warn};

use crate::state::StateStore;
use crate::{ChoiceOption, Radio};

/// Decides whether picking an option would leave any matching rows.
///
/// Built once per render pass: the chooser's filter definitions are
/// converted up front, then [`valid`](Self::valid) is called once per option.
/// The evaluator never writes to shared state; each check runs against a
/// hypothetical snapshot with the primary key overridden.
pub struct ValidityEvaluator<'a, D: DataSource + ?Sized> {
    filters: Vec<ContentFilter>,
    primary: String,
    state: &'a StateStore,
    data: &'a D,
}

impl<'a, D: DataSource + ?Sized> ValidityEvaluator<'a, D> {
    pub fn new(radio: &Radio, state: &'a StateStore, data: &'a D) -> Self {
        Self {
            filters: radio.content_filters(),
            primary: radio.config.primary_state_name.clone(),
            state,
            data,
        }
    }

    /// Returns `true` if the chooser has no filters (the data source is not
    /// consulted) or if some row matches the filters with the option's value
    /// in the primary key. Data-source failures count as no match.
    pub fn valid(&self, option: &mut ChoiceOption) -> bool {
        if self.filters.is_empty() {
            return true;
        }

        let overrides = (!self.primary.is_empty())
            .then(|| (self.primary.clone(), option.value.clone()));
        let hypothetical = self.state.clone_with(overrides);

        match self
            .data
            .has_matching_rows(&self.filters, &hypothetical, option.cache_mut())
        {
            Ok(found) => {
                trace!("[validity] option {:?} -> {}", option.value, found);
                found
            }
            Err(e) => {
                warn!("[validity] option {:?} treated as invalid: {}", option.value, e);
                false
            }
        }
    }

    /// Whether checks will hit the data source at all.
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}
