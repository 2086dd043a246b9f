//! Chooser configuration types.

use serde::{Deserialize, Serialize};

use crate::ChooserError;

/// Default shared-state key holding the current pick.
pub const DEFAULT_PRIMARY_STATE: &str = "$radio";

/// Default shared-state key written in lockstep with the primary key.
pub const DEFAULT_SECONDARY_STATE: &str = "$secondaryRadio";

/// Per-chooser configuration.
///
/// Everything except the two state keys is a rendering hint passed through
/// to the view. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioConfig {
    /// Component name; see [`Radio::name`](crate::Radio::name) for fallbacks.
    pub name: String,

    /// Size multiplier for rendered buttons.
    pub scale: f32,

    /// Legend text shown above the buttons (empty = no legend).
    pub label: String,

    /// Shared-state key holding the current pick.
    /// An empty key disables default adoption.
    pub primary_state_name: String,

    /// Shared-state key always written together with the primary key.
    pub secondary_state_name: String,

    /// Background color of buttons that are not highlighted.
    pub unselected: String,

    /// Background color of the highlighted button.
    pub selected: String,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            scale: 1.0,
            label: String::new(),
            primary_state_name: DEFAULT_PRIMARY_STATE.to_string(),
            secondary_state_name: DEFAULT_SECONDARY_STATE.to_string(),
            unselected: "lightgray".to_string(),
            selected: "pink".to_string(),
        }
    }
}

impl RadioConfig {
    /// Property names in the order shown by the settings view.
    pub const PROPERTIES: [&'static str; 7] = [
        "name",
        "scale",
        "label",
        "primaryStateName",
        "secondaryStateName",
        "unselected",
        "selected",
    ];

    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the component name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the legend text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the button scale.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set both shared-state keys.
    pub fn with_state_names(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_state_name = primary.into();
        self.secondary_state_name = secondary.into();
        self
    }

    /// Set the highlighted and plain button colors.
    pub fn with_colors(mut self, selected: impl Into<String>, unselected: impl Into<String>) -> Self {
        self.selected = selected.into();
        self.unselected = unselected.into();
        self
    }

    /// Read a property as text.
    pub fn property(&self, name: &str) -> Option<String> {
        let text = match name {
            "name" => self.name.clone(),
            "scale" => self.scale.to_string(),
            "label" => self.label.clone(),
            "primaryStateName" => self.primary_state_name.clone(),
            "secondaryStateName" => self.secondary_state_name.clone(),
            "unselected" => self.unselected.clone(),
            "selected" => self.selected.clone(),
            _ => return None,
        };
        Some(text)
    }

    /// Set a property from text, as the settings view does.
    pub fn set_property(&mut self, name: &str, text: &str) -> Result<(), ChooserError> {
        match name {
            "name" => self.name = text.to_string(),
            "scale" => {
                self.scale = text
                    .trim()
                    .parse()
                    .ok()
                    .filter(|s: &f32| s.is_finite() && *s > 0.0)
                    .ok_or_else(|| ChooserError::InvalidProperty {
                        name: name.to_string(),
                        value: text.to_string(),
                    })?;
            }
            "label" => self.label = text.to_string(),
            "primaryStateName" => self.primary_state_name = text.to_string(),
            "secondaryStateName" => self.secondary_state_name = text.to_string(),
            "unselected" => self.unselected = text.to_string(),
            "selected" => self.selected = text.to_string(),
            _ => return Err(ChooserError::UnknownProperty(name.to_string())),
        }
        Ok(())
    }
}
