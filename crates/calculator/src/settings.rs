//! Calculator settings

use crate::SettingsError;
use chemistry::{RuleConfig, RuleEngine};
use field_store::{FieldStore, JsonFileFieldStore, MemoryFieldStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable prefix, e.g. `AQUARIUM_RULES__TOLERANCE=0.2`
pub const ENV_PREFIX: &str = "AQUARIUM";

/// Calculator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule constants (default: the standard ratios and limits)
    pub rules: RuleConfig,
    /// File remembering field values; in memory when unset
    pub store_path: Option<PathBuf>,
}

impl Settings {
    /// Load from an optional file, then `AQUARIUM_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_with_env(path, None)
    }

    /// Like [`Settings::load`], reading variables from `env` instead of the process when given
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.rules.validate()?;

        info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Rule engine for the configured rules
    pub fn engine(&self) -> Result<RuleEngine, SettingsError> {
        Ok(RuleEngine::new(self.rules.clone())?)
    }

    /// Field store for the configured location
    pub fn open_store(&self) -> Result<Box<dyn FieldStore>, SettingsError> {
        match &self.store_path {
            Some(path) => Ok(Box::new(JsonFileFieldStore::open(path)?)),
            None => Ok(Box::new(MemoryFieldStore::new())),
        }
    }
}
