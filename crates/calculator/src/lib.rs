//! Water Values Calculator
//!
//! Glue between the six form fields and the rule engine:
//! - field values are remembered in a [`FieldStore`] between visits
//! - submitting validates the fields and evaluates them
//! - editing a field discards results computed from older values
//! - results render as HTML, Markdown or plain text

mod report;
mod session;
mod settings;

pub use report::Report;
pub use session::{FormSession, Outcome};
pub use settings::{Settings, ENV_PREFIX};

pub use chemistry::{Ion, Readings, RuleConfig, RuleEngine, Warning};
pub use field_store::{FieldStore, JsonFileFieldStore, MemoryFieldStore, StoreError};
pub use reading_validator::{InvalidReadings, RawForm, ValidationError};

use thiserror::Error;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error(transparent)]
    Invalid(#[from] InvalidReadings),
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid rules: {0}")]
    Rules(#[from] chemistry::ConfigError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
