//! Radio chooser - a group of mutually exclusive options bound to shared state.

use chooser_data::{ContentFilter, DataSource};
use serde::{Deserialize, Serialize};

use crate::filter_def::to_content_filters;
use crate::selection::SelectionController;
use crate::state::StateStore;
use crate::validity::ValidityEvaluator;
use crate::{ChoiceOption, ChooserError, FilterDef, RadioConfig};

/// A chooser definition: configuration plus its authored children.
///
/// Options and filter definitions are kept as two ordered collections.
/// Option order is significant: it is the render order and decides which
/// option is adopted as the default.
///
/// # Example
///
/// ```
/// use chooser::{Radio, RadioConfig};
/// use chooser::state::StateStore;
/// use chooser_data::Table;
///
/// let mut radio = Radio::new(RadioConfig::new().with_label("Topic"))
///     .with_option("Animals", "animals")
///     .with_option("Food", "food");
///
/// let state = StateStore::new();
/// let view = radio.render(&state, &Table::new());
///
/// assert_eq!(view.legend.as_deref(), Some("Topic"));
/// assert_eq!(state.text("$radio"), "animals");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Radio {
    #[serde(flatten)]
    pub config: RadioConfig,
    #[serde(default)]
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub filters: Vec<FilterDef>,
}

impl Radio {
    /// Create a chooser with no children
    pub fn new(config: RadioConfig) -> Self {
        Self {
            config,
            options: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Append an option
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(ChoiceOption::new(name, value));
        self
    }

    /// Append a filter definition
    pub fn with_filter(mut self, filter: FilterDef) -> Self {
        self.filters.push(filter);
        self
    }

    /// Load a definition from JSON
    pub fn from_json(json: &str) -> Result<Self, ChooserError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the definition as JSON. Option caches are not included.
    pub fn to_json(&self) -> Result<String, ChooserError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Display name: the explicit name, else the label, else the primary key
    pub fn name(&self) -> &str {
        [
            &self.config.name,
            &self.config.label,
            &self.config.primary_state_name,
        ]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(String::as_str)
        .unwrap_or_default()
    }

    /// Content filters built from the filter definitions
    pub fn content_filters(&self) -> Vec<ContentFilter> {
        to_content_filters(&self.filters)
    }

    /// Selection controller bound to this chooser's state keys
    pub fn controller(&self) -> SelectionController {
        SelectionController::new(
            &self.config.primary_state_name,
            &self.config.secondary_state_name,
        )
    }

    /// Whether picking the option at `index` would leave at least one
    /// matching row. Out-of-range indices are invalid.
    pub fn valid<D: DataSource + ?Sized>(
        &mut self,
        index: usize,
        state: &StateStore,
        data: &D,
    ) -> bool {
        let evaluator = ValidityEvaluator::new(self, state, data);
        match self.options.get_mut(index) {
            Some(option) => evaluator.valid(option),
            None => false,
        }
    }
}
