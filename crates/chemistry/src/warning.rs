//! Remediation warnings

use crate::ion::Ion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suggested correction for an imbalanced pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Remedy {
    /// First ion too low, or second too high
    RaiseFirstLowerSecond,
    /// First ion too high, or second too low
    LowerFirstRaiseSecond,
}

/// A detected imbalance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A ratio pair left its tolerance band
    RatioImbalance {
        first: Ion,
        second: Ion,
        remedy: Remedy,
        ideal_first: f64,
        ideal_second: f64,
    },

    /// A single reading exceeds its absolute limit
    ThresholdExceeded { ion: Ion, limit: f64 },
}

/// A piece of message text; emphasized pieces carry the computed numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasized: bool,
}

impl Fragment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    fn emphasis(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Round half away from zero to two decimals, treating the value as the
/// decimal it prints as (1.025 rounds to 1.03)
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    // Snap to 15 significant digits so binary representation error cannot pull a tie down
    let snapped: f64 = format!("{scaled:.14e}").parse().unwrap_or(scaled);
    snapped.round() / 100.0
}

/// Format a concentration for display, e.g. `12.5 mg/l`
pub fn format_concentration(value: f64) -> String {
    format!("{} mg/l", round2(value))
}

impl Warning {
    /// Message split into plain and emphasized fragments
    pub fn fragments(&self) -> Vec<Fragment> {
        match *self {
            Warning::RatioImbalance {
                first,
                second,
                remedy,
                ideal_first,
                ideal_second,
            } => {
                let (first_verb, second_verb) = match remedy {
                    Remedy::RaiseFirstLowerSecond => ("raise", "lower"),
                    Remedy::LowerFirstRaiseSecond => ("lower", "raise"),
                };
                vec![
                    Fragment::plain(format!("{first_verb} {first} to ")),
                    Fragment::emphasis(format_concentration(ideal_first)),
                    Fragment::plain(format!(", or {second_verb} {second} to ")),
                    Fragment::emphasis(format_concentration(ideal_second)),
                    Fragment::plain("."),
                ]
            }
            Warning::ThresholdExceeded { ion, limit } => vec![
                Fragment::plain(format!("{ion} should not exceed ")),
                Fragment::emphasis(format_concentration(limit)),
                Fragment::plain("."),
            ],
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in self.fragments() {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}
