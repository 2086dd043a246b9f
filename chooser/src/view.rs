//! Render-ready view of a chooser.

use chooser_data::DataSource;
use log::debug;

use crate::selection::SelectionController;
use crate::state::StateStore;
use crate::validity::ValidityEvaluator;
use crate::Radio;

/// One rendered button.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceEntry {
    /// Position among the chooser's options.
    pub index: usize,
    pub label: String,
    pub value: String,
    /// Not interactive; picking it would leave no matching rows.
    pub disabled: bool,
    pub highlighted: bool,
    /// Background color hint (selected or unselected color).
    pub background: String,
}

/// Everything the rendering layer needs for one pass: a legend, one entry
/// per option in order, and the controller used to route clicks.
#[derive(Debug, Clone, PartialEq)]
pub struct ChooserView {
    pub name: String,
    pub legend: Option<String>,
    pub scale: f32,
    pub entries: Vec<ChoiceEntry>,
    controller: SelectionController,
}

impl ChooserView {
    /// Handle a click on the entry at `index`.
    ///
    /// Enabled entries write their value to both state keys in one update.
    /// Disabled or out-of-range entries are ignored. Returns whether shared
    /// state was written.
    pub fn click(&self, index: usize, state: &StateStore) -> bool {
        match self.entries.get(index) {
            Some(entry) if !entry.disabled => {
                self.controller.select(state, &entry.value);
                true
            }
            Some(entry) => {
                debug!("[view] ignoring click on disabled {:?}", entry.value);
                false
            }
            None => false,
        }
    }

    /// The entry rendered for `index`
    pub fn entry(&self, index: usize) -> Option<&ChoiceEntry> {
        self.entries.get(index)
    }

    /// Entries currently drawn as selected
    pub fn highlighted(&self) -> impl Iterator<Item = &ChoiceEntry> {
        self.entries.iter().filter(|e| e.highlighted)
    }

    /// Entries that accept clicks
    pub fn enabled(&self) -> impl Iterator<Item = &ChoiceEntry> {
        self.entries.iter().filter(|e| !e.disabled)
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }
}

impl Radio {
    /// Run one render pass.
    ///
    /// 1. Check validity for every option, in order, once each.
    /// 2. Resolve the current value; if unset, pick the first valid
    ///    non-empty option and commit it to both state keys.
    /// 3. Build entries against the resolved current value.
    pub fn render<D: DataSource + ?Sized>(&mut self, state: &StateStore, data: &D) -> ChooserView {
        let evaluator = ValidityEvaluator::new(self, state, data);
        let validity: Vec<bool> = self
            .options
            .iter_mut()
            .map(|option| evaluator.valid(option))
            .collect();

        let controller = self.controller();
        let mut current = controller.current(state);
        let candidate = controller
            .default_candidate(
                current.as_deref(),
                self.options
                    .iter()
                    .map(|o| o.value.as_str())
                    .zip(validity.iter().copied()),
            )
            .map(str::to_string);
        if let Some(value) = candidate {
            controller.commit_default(state, &value);
            current = Some(value);
        }

        let entries = self
            .options
            .iter()
            .zip(validity)
            .enumerate()
            .map(|(index, (option, valid))| {
                let highlighted =
                    SelectionController::is_highlighted(&option.value, index, current.as_deref());
                ChoiceEntry {
                    index,
                    label: option.name.clone(),
                    value: option.value.clone(),
                    disabled: !valid,
                    highlighted,
                    background: if highlighted {
                        self.config.selected.clone()
                    } else {
                        self.config.unselected.clone()
                    },
                }
            })
            .collect();

        ChooserView {
            name: self.name().to_string(),
            legend: (!self.config.label.is_empty()).then(|| self.config.label.clone()),
            scale: self.config.scale,
            entries,
            controller,
        }
    }
}
