pub mod config;
pub mod error;
pub mod filter_def;
pub mod option;
pub mod radio;
pub mod selection;
pub mod settings;
pub mod state;
pub mod validity;
pub mod view;

pub use config::RadioConfig;
pub use error::ChooserError;
pub use filter_def::{FilterDef, to_content_filters};
pub use option::ChoiceOption;
pub use radio::Radio;

pub mod prelude {
    pub use crate::config::{DEFAULT_PRIMARY_STATE, DEFAULT_SECONDARY_STATE, RadioConfig};
    pub use crate::error::ChooserError;
    pub use crate::filter_def::FilterDef;
    pub use crate::option::ChoiceOption;
    pub use crate::radio::Radio;
    pub use crate::selection::SelectionController;
    pub use crate::settings::{SettingsEdit, SettingsView};
    pub use crate::state::{StateSnapshot, StateStore, SubscriptionId};
    pub use crate::validity::ValidityEvaluator;
    pub use crate::view::{ChoiceEntry, ChooserView};

    pub use chooser_data::{DataSource, FilterOp, Row, Table, Value};
}
