//! Ions and Reading Sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured ion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ion {
    Magnesium,
    Calcium,
    Potassium,
    TotalPhosphate,
    OrthoPhosphate,
    Nitrate,
}

impl Ion {
    /// All ions in form order
    pub const ALL: [Ion; 6] = [
        Ion::Magnesium,
        Ion::Calcium,
        Ion::Potassium,
        Ion::TotalPhosphate,
        Ion::OrthoPhosphate,
        Ion::Nitrate,
    ];

    /// Stable key used for form fields and the field store
    pub fn key(self) -> &'static str {
        match self {
            Ion::Magnesium => "magnesium",
            Ion::Calcium => "calcium",
            Ion::Potassium => "potassium",
            Ion::TotalPhosphate => "total_phosphate",
            Ion::OrthoPhosphate => "ortho_phosphate",
            Ion::Nitrate => "nitrate",
        }
    }

    /// Name used in messages
    pub fn name(self) -> &'static str {
        match self {
            Ion::Magnesium => "magnesium",
            Ion::Calcium => "calcium",
            Ion::Potassium => "potassium",
            Ion::TotalPhosphate => "total phosphate",
            Ion::OrthoPhosphate => "ortho-phosphate",
            Ion::Nitrate => "nitrate",
        }
    }

    /// Look up an ion by its field key
    pub fn from_key(key: &str) -> Option<Ion> {
        Ion::ALL.into_iter().find(|ion| ion.key() == key)
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One set of measured concentrations (mg/l)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Readings {
    pub magnesium: f64,
    pub calcium: f64,
    pub potassium: f64,
    pub total_phosphate: f64,
    pub ortho_phosphate: f64,
    pub nitrate: f64,
}

impl Readings {
    /// Get the reading for an ion
    pub fn get(&self, ion: Ion) -> f64 {
        match ion {
            Ion::Magnesium => self.magnesium,
            Ion::Calcium => self.calcium,
            Ion::Potassium => self.potassium,
            Ion::TotalPhosphate => self.total_phosphate,
            Ion::OrthoPhosphate => self.ortho_phosphate,
            Ion::Nitrate => self.nitrate,
        }
    }

    /// Set the reading for an ion
    pub fn set(&mut self, ion: Ion, value: f64) {
        let slot = match ion {
            Ion::Magnesium => &mut self.magnesium,
            Ion::Calcium => &mut self.calcium,
            Ion::Potassium => &mut self.potassium,
            Ion::TotalPhosphate => &mut self.total_phosphate,
            Ion::OrthoPhosphate => &mut self.ortho_phosphate,
            Ion::Nitrate => &mut self.nitrate,
        };
        *slot = value;
    }

    /// Builder-style setter
    pub fn with(mut self, ion: Ion, value: f64) -> Self {
        self.set(ion, value);
        self
    }
}
