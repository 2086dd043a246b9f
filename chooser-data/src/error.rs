//! Error types

/// Errors raised by a data source while evaluating content filters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// A filter cannot be evaluated as written.
    #[error("Malformed filter on '{field}': {reason}")]
    MalformedFilter { field: String, reason: String },

    /// The operator name does not name a known comparison.
    #[error("Unknown filter operator '{0}'")]
    UnknownOperator(String),
}

impl DataError {
    /// Creates a new malformed filter error.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedFilter {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
