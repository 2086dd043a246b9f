//! Authored content-filter definitions.

use chooser_data::{ContentFilter, FilterOp, Operand};
use serde::{Deserialize, Serialize};

/// A filter as authored in the settings view: a row field, a comparison,
/// and operand text that may reference a `$state` key.
///
/// # Example
///
/// ```
/// use chooser::FilterDef;
/// use chooser_data::FilterOp;
///
/// // Keep rows whose `sheet` column equals the option being checked
/// let def = FilterDef::new("sheet", FilterOp::Equals, "$radio");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterDef {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub operator: FilterOp,
    #[serde(default)]
    pub value: String,
}

impl FilterDef {
    pub fn new(field: impl Into<String>, operator: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Convert to the data source's filter representation
    pub fn to_content_filter(&self) -> ContentFilter {
        ContentFilter::new(
            self.field.clone(),
            self.operator,
            Operand::parse(&self.value),
        )
    }
}

/// Convert authored definitions into content filters, preserving order.
///
/// No validation happens here; malformed definitions are reported by the
/// data source when evaluated.
pub fn to_content_filters(defs: &[FilterDef]) -> Vec<ContentFilter> {
    defs.iter().map(FilterDef::to_content_filter).collect()
}
