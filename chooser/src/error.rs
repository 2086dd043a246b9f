//! Chooser error types.

use chooser_data::DataError;
use thiserror::Error;

/// Errors raised while configuring or editing a chooser.
///
/// Rendering and clicking never fail; these come only from loading a
/// definition or applying a settings edit.
#[derive(Debug, Error)]
pub enum ChooserError {
    /// The JSON definition could not be parsed or written.
    #[error("Invalid chooser definition: {0}")]
    Config(#[from] serde_json::Error),

    /// An option index was out of range.
    #[error("Option index {index} out of range ({len} options)")]
    OptionIndex { index: usize, len: usize },

    /// A filter index was out of range.
    #[error("Filter index {index} out of range ({len} filters)")]
    FilterIndex { index: usize, len: usize },

    /// A settings edit named a property that does not exist.
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    /// A settings edit supplied text the property cannot hold.
    #[error("Invalid value '{value}' for property '{name}'")]
    InvalidProperty { name: String, value: String },

    /// A filter definition was rejected.
    #[error(transparent)]
    Filter(#[from] DataError),
}
