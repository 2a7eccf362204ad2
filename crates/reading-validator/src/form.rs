//! Raw form input

use chemistry::Ion;
use serde::{Deserialize, Serialize};

/// Unparsed text of the six form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawForm {
    pub magnesium: String,
    pub calcium: String,
    pub potassium: String,
    pub total_phosphate: String,
    pub ortho_phosphate: String,
    pub nitrate: String,
}

impl RawForm {
    pub fn get(&self, ion: Ion) -> &str {
        match ion {
            Ion::Magnesium => &self.magnesium,
            Ion::Calcium => &self.calcium,
            Ion::Potassium => &self.potassium,
            Ion::TotalPhosphate => &self.total_phosphate,
            Ion::OrthoPhosphate => &self.ortho_phosphate,
            Ion::Nitrate => &self.nitrate,
        }
    }

    pub fn set(&mut self, ion: Ion, value: impl Into<String>) {
        let slot = match ion {
            Ion::Magnesium => &mut self.magnesium,
            Ion::Calcium => &mut self.calcium,
            Ion::Potassium => &mut self.potassium,
            Ion::TotalPhosphate => &mut self.total_phosphate,
            Ion::OrthoPhosphate => &mut self.ortho_phosphate,
            Ion::Nitrate => &mut self.nitrate,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    pub fn with(mut self, ion: Ion, value: impl Into<String>) -> Self {
        self.set(ion, value);
        self
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        Ion::ALL.into_iter().all(|ion| self.get(ion).trim().is_empty())
    }
}
