//! Authoring view: the tables shown while configuring a chooser.

use std::collections::HashMap;

use chooser_data::FilterOp;
use log::debug;

use crate::{ChoiceOption, ChooserError, FilterDef, Radio, RadioConfig};

/// A property row: name and current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: &'static str,
    pub value: String,
}

/// A filter row in the editable filter list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRow {
    pub index: usize,
    pub field: String,
    pub operator: FilterOp,
    pub value: String,
}

/// An option row: `#`, name and value as shown in the options table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// 1-based position shown in the `#` column.
    pub number: usize,
    pub name: String,
    pub value: String,
    /// Another option has the same value; both will highlight together.
    pub duplicate: bool,
}

/// Snapshot of everything the settings panel edits.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub properties: Vec<PropertyRow>,
    /// Empty when the chooser has no filters; the panel then omits the list.
    pub filters: Vec<FilterRow>,
    pub options: Vec<OptionRow>,
}

impl SettingsView {
    /// Operator names offered for each filter row.
    pub fn operators() -> impl Iterator<Item = &'static str> {
        FilterOp::ALL.into_iter().map(|op| op.as_str())
    }

    /// Whether any option rows share a value.
    pub fn has_duplicates(&self) -> bool {
        self.options.iter().any(|row| row.duplicate)
    }
}

/// A single edit made in the settings panel. Indices are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEdit {
    /// Append an empty option.
    AddOption,
    RemoveOption(usize),
    SetOptionName(usize, String),
    SetOptionValue(usize, String),
    /// Move an option from one position to another.
    MoveOption { from: usize, to: usize },
    /// Append an empty filter.
    AddFilter,
    RemoveFilter(usize),
    SetFilter(usize, FilterDef),
    /// Set a filter's operator by display name.
    SetFilterOperator(usize, String),
    SetProperty { name: String, value: String },
}

impl Radio {
    /// Build the settings tables.
    pub fn settings(&self) -> SettingsView {
        let properties = RadioConfig::PROPERTIES
            .into_iter()
            .map(|name| PropertyRow {
                name,
                value: self.config.property(name).unwrap_or_default(),
            })
            .collect();

        let filters = self
            .filters
            .iter()
            .enumerate()
            .map(|(index, f)| FilterRow {
                index,
                field: f.field.clone(),
                operator: f.operator,
                value: f.value.clone(),
            })
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for option in &self.options {
            *counts.entry(option.value.as_str()).or_default() += 1;
        }
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| OptionRow {
                number: i + 1,
                name: o.name.clone(),
                value: o.value.clone(),
                duplicate: counts.get(o.value.as_str()).copied().unwrap_or(0) > 1,
            })
            .collect();

        SettingsView {
            properties,
            filters,
            options,
        }
    }

    /// Apply one settings edit.
    pub fn apply_edit(&mut self, edit: SettingsEdit) -> Result<(), ChooserError> {
        debug!("[settings] {}: {:?}", self.name(), edit);
        match edit {
            SettingsEdit::AddOption => self.options.push(ChoiceOption::default()),
            SettingsEdit::RemoveOption(i) => {
                self.check_option(i)?;
                self.options.remove(i);
            }
            SettingsEdit::SetOptionName(i, name) => {
                self.check_option(i)?;
                self.options[i].name = name;
            }
            SettingsEdit::SetOptionValue(i, value) => {
                self.check_option(i)?;
                self.options[i].set_value(value);
            }
            SettingsEdit::MoveOption { from, to } => {
                self.check_option(from)?;
                self.check_option(to)?;
                let option = self.options.remove(from);
                self.options.insert(to, option);
            }
            SettingsEdit::AddFilter => self.filters.push(FilterDef::default()),
            SettingsEdit::RemoveFilter(i) => {
                self.check_filter(i)?;
                self.filters.remove(i);
            }
            SettingsEdit::SetFilter(i, def) => {
                self.check_filter(i)?;
                self.filters[i] = def;
            }
            SettingsEdit::SetFilterOperator(i, name) => {
                self.check_filter(i)?;
                self.filters[i].operator = name.parse()?;
            }
            SettingsEdit::SetProperty { name, value } => {
                self.config.set_property(&name, &value)?;
            }
        }
        Ok(())
    }

    fn check_option(&self, index: usize) -> Result<(), ChooserError> {
        if index < self.options.len() {
            Ok(())
        } else {
            Err(ChooserError::OptionIndex {
                index,
                len: self.options.len(),
            })
        }
    }

    fn check_filter(&self, index: usize) -> Result<(), ChooserError> {
        if index < self.filters.len() {
            Ok(())
        } else {
            Err(ChooserError::FilterIndex {
                index,
                len: self.filters.len(),
            })
        }
    }
}
