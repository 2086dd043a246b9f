//! Content filters evaluated against table rows.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::DataError;
use crate::Row;
use crate::Value;

/// Read access to a (possibly hypothetical) shared-state mapping.
///
/// Filters whose operand references a state key are resolved through this
/// trait at evaluation time, so the same filter list can be evaluated against
/// several hypothetical states without mutating the real one.
pub trait StateLookup {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&Value>;
}

impl StateLookup for HashMap<String, Value> {
    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Comparison applied between a row field and a filter operand.
///
/// Serialized using the human-readable names shown in the settings view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOp {
    /// Field equals the operand.
    #[default]
    #[serde(rename = "equals")]
    Equals,
    /// Field starts with the operand.
    #[serde(rename = "starts with")]
    StartsWith,
    /// Field contains the operand.
    #[serde(rename = "contains")]
    Contains,
    /// Field is less than the operand.
    #[serde(rename = "less than")]
    LessThan,
    /// Field is greater than the operand.
    #[serde(rename = "greater than")]
    GreaterThan,
    /// Field is null or the empty string.
    #[serde(rename = "empty")]
    Empty,
    /// Field has a non-empty value.
    #[serde(rename = "not empty")]
    NotEmpty,
}

impl FilterOp {
    /// Every operator, in the order offered to authors.
    pub const ALL: [FilterOp; 7] = [
        FilterOp::Equals,
        FilterOp::StartsWith,
        FilterOp::Contains,
        FilterOp::LessThan,
        FilterOp::GreaterThan,
        FilterOp::Empty,
        FilterOp::NotEmpty,
    ];

    /// The display name of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Equals => "equals",
            FilterOp::StartsWith => "starts with",
            FilterOp::Contains => "contains",
            FilterOp::LessThan => "less than",
            FilterOp::GreaterThan => "greater than",
            FilterOp::Empty => "empty",
            FilterOp::NotEmpty => "not empty",
        }
    }

    /// Returns `false` for operators that ignore their operand.
    pub fn takes_operand(&self) -> bool {
        !matches!(self, FilterOp::Empty | FilterOp::NotEmpty)
    }
}

impl FromStr for FilterOp {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterOp::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DataError::UnknownOperator(s.to_string()))
    }
}

impl std::fmt::Display for FilterOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Right-hand side of a content filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal value.
    Literal(Value),
    /// A reference to a shared-state key, resolved at evaluation time.
    State(String),
}

impl Operand {
    /// Parses authored operand text.
    ///
    /// Text starting with `$` names a state key (the `$` is part of the key);
    /// anything else is a literal string.
    pub fn parse(text: &str) -> Self {
        if text.starts_with('$') && text.len() > 1 {
            Operand::State(text.to_string())
        } else {
            Operand::Literal(Value::from(text))
        }
    }

    fn resolve(&self, state: &dyn StateLookup) -> String {
        match self {
            Operand::Literal(v) => v.text(),
            Operand::State(key) => state.lookup(key).map(Value::text).unwrap_or_default(),
        }
    }
}

/// A predicate over table rows.
///
/// # Example
///
/// ```
/// use chooser_data::{ContentFilter, FilterOp, Operand};
///
/// // Rows whose sheet matches whatever `$radio` currently holds
/// let filter = ContentFilter::new("sheet", FilterOp::Equals, Operand::parse("$radio"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFilter {
    pub field: String,
    pub op: FilterOp,
    pub operand: Operand,
}

impl ContentFilter {
    /// Creates a new content filter.
    pub fn new(field: impl Into<String>, op: FilterOp, operand: Operand) -> Self {
        Self {
            field: field.into(),
            op,
            operand,
        }
    }

    /// Creates an equality filter against a literal or `$state` reference.
    pub fn equals(field: impl Into<String>, operand: &str) -> Self {
        Self::new(field, FilterOp::Equals, Operand::parse(operand))
    }

    /// Resolves state references, producing a filter ready to match rows.
    pub fn bind(&self, state: &dyn StateLookup) -> Result<BoundFilter, DataError> {
        if self.field.trim().is_empty() {
            return Err(DataError::malformed(&self.field, "field name is empty"));
        }
        let value = if self.op.takes_operand() {
            self.operand.resolve(state)
        } else {
            String::new()
        };
        Ok(BoundFilter {
            field: self.field.clone(),
            op: self.op,
            value,
        })
    }
}

/// A content filter with every state reference resolved.
///
/// The serialized form of a list of bound filters is the memoization
/// signature used by [`MatchCache`](crate::MatchCache).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl BoundFilter {
    /// Returns `true` if the row satisfies this filter.
    ///
    /// Text comparisons are case-insensitive. Ordering comparisons are
    /// numeric when both sides parse as numbers.
    pub fn matches(&self, row: &Row) -> bool {
        let cell = row.get(&self.field);
        match self.op {
            FilterOp::Empty => cell.is_empty(),
            FilterOp::NotEmpty => !cell.is_empty(),
            FilterOp::Equals => fold(&cell.text()) == fold(&self.value),
            FilterOp::StartsWith => fold(&cell.text()).starts_with(&fold(&self.value)),
            FilterOp::Contains => fold(&cell.text()).contains(&fold(&self.value)),
            FilterOp::LessThan => compare(cell, &self.value) == Some(Ordering::Less),
            FilterOp::GreaterThan => compare(cell, &self.value) == Some(Ordering::Greater),
        }
    }
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

fn compare(cell: &Value, operand: &str) -> Option<Ordering> {
    if cell.is_null() {
        return None;
    }
    match (cell.as_f64(), operand.trim().parse::<f64>().ok()) {
        (Some(a), Some(b)) => a.partial_cmp(&b),
        _ => Some(fold(&cell.text()).cmp(&fold(operand))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pairs: &[(&str, &str)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_operand_parse() {
        assert_eq!(Operand::parse("$radio"), Operand::State("$radio".into()));
        assert_eq!(Operand::parse("$"), Operand::Literal(Value::from("$")));
        assert_eq!(Operand::parse("cat"), Operand::Literal(Value::from("cat")));
    }

    #[test]
    fn test_bind_resolves_state_reference() {
        let filter = ContentFilter::equals("sheet", "$radio");
        let bound = filter.bind(&state(&[("$radio", "animals")])).unwrap();
        assert_eq!(bound.value, "animals");

        let unset = filter.bind(&state(&[])).unwrap();
        assert_eq!(unset.value, "");
    }

    #[test]
    fn test_bind_rejects_empty_field() {
        let filter = ContentFilter::equals("  ", "x");
        assert!(matches!(
            filter.bind(&state(&[])),
            Err(DataError::MalformedFilter { .. })
        ));
    }

    #[test]
    fn test_compare_numeric_and_text() {
        assert_eq!(compare(&Value::from(9i64), "10"), Some(Ordering::Less));
        assert_eq!(compare(&Value::from("9"), "10"), Some(Ordering::Less));
        assert_eq!(compare(&Value::from("b"), "A"), Some(Ordering::Greater));
        assert_eq!(compare(&Value::Null, "1"), None);
    }

    #[test]
    fn test_operator_names_round_trip() {
        for op in FilterOp::ALL {
            assert_eq!(op.as_str().parse::<FilterOp>().unwrap(), op);
        }
        assert_eq!("Starts With".parse::<FilterOp>().unwrap(), FilterOp::StartsWith);
        assert!("between".parse::<FilterOp>().is_err());
    }
}
