//! Validation Error Types

use chemistry::Ion;
use thiserror::Error;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field left empty
    #[error("{ion} is required")]
    MissingField { ion: Ion },

    /// Field text is not a decimal number
    #[error("{ion} value {raw:?} is not a number")]
    NotANumber { ion: Ion, raw: String },

    /// NaN or infinite
    #[error("{ion} value must be a finite number")]
    NotFinite { ion: Ion },

    /// Below zero
    #[error("{ion} value {value} must not be negative")]
    Negative { ion: Ion, value: f64 },
}

impl ValidationError {
    /// Field the error refers to
    pub fn ion(&self) -> Ion {
        match self {
            ValidationError::MissingField { ion }
            | ValidationError::NotANumber { ion, .. }
            | ValidationError::NotFinite { ion }
            | ValidationError::Negative { ion, .. } => *ion,
        }
    }
}

/// Every field that failed validation, in form order
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid readings: {}", summary(.errors))]
pub struct InvalidReadings {
    pub errors: Vec<ValidationError>,
}

fn summary(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
