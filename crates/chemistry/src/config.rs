//! Rule configuration

use crate::ion::Ion;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors in a rule configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Tolerance outside [0, 1)
    #[error("tolerance {0} must be within [0, 1)")]
    InvalidTolerance(f64),

    /// Ratio part that is not a positive finite number
    #[error("{first}:{second} ratio part {part} must be positive and finite")]
    InvalidRatioPart { first: Ion, second: Ion, part: f64 },

    /// Ratio rule pairing an ion with itself
    #[error("ratio rule pairs {0} with itself")]
    SelfPairing(Ion),

    /// Threshold that is negative or not finite
    #[error("{ion} threshold {limit} must be non-negative and finite")]
    InvalidThreshold { ion: Ion, limit: f64 },
}

/// Target ratio `first : second = first_parts : second_parts`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRule {
    pub first: Ion,
    pub second: Ion,
    pub first_parts: f64,
    pub second_parts: f64,
}

impl RatioRule {
    pub fn new(first: Ion, second: Ion, first_parts: f64, second_parts: f64) -> Self {
        Self {
            first,
            second,
            first_parts,
            second_parts,
        }
    }
}

/// Absolute upper limit for a single ion (mg/l)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub ion: Ion,
    pub limit: f64,
}

impl ThresholdRule {
    pub fn new(ion: Ion, limit: f64) -> Self {
        Self { ion, limit }
    }
}

/// Rule set evaluated by the engine, in evaluation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Relative width of the acceptable band around an ideal value (default: 0.1)
    pub tolerance: f64,
    /// Ratio pairs, checked first and in order
    pub ratios: Vec<RatioRule>,
    /// Absolute limits, checked after all ratio pairs
    pub thresholds: Vec<ThresholdRule>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            ratios: vec![
                RatioRule::new(Ion::Calcium, Ion::Magnesium, 5.0, 2.0),
                RatioRule::new(Ion::Potassium, Ion::Magnesium, 5.0, 2.0),
                RatioRule::new(Ion::TotalPhosphate, Ion::Nitrate, 1.0, 16.0),
            ],
            thresholds: vec![
                ThresholdRule::new(Ion::TotalPhosphate, 0.05),
                ThresholdRule::new(Ion::OrthoPhosphate, 0.03),
            ],
        }
    }
}

impl RuleConfig {
    /// Check that every constant is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.tolerance) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }

        for rule in &self.ratios {
            if rule.first == rule.second {
                return Err(ConfigError::SelfPairing(rule.first));
            }
            for part in [rule.first_parts, rule.second_parts] {
                if !part.is_finite() || part <= 0.0 {
                    return Err(ConfigError::InvalidRatioPart {
                        first: rule.first,
                        second: rule.second,
                        part,
                    });
                }
            }
        }

        for rule in &self.thresholds {
            if !rule.limit.is_finite() || rule.limit < 0.0 {
                return Err(ConfigError::InvalidThreshold {
                    ion: rule.ion,
                    limit: rule.limit,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RuleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let config = RuleConfig {
            tolerance: 1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTolerance(1.0)));
    }

    #[test]
    fn test_rejects_zero_ratio_part() {
        let config = RuleConfig {
            ratios: vec![RatioRule::new(Ion::Calcium, Ion::Magnesium, 5.0, 0.0)],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRatioPart { part, .. }) if part == 0.0
        ));
    }

    #[test]
    fn test_rejects_self_pairing() {
        let config = RuleConfig {
            ratios: vec![RatioRule::new(Ion::Nitrate, Ion::Nitrate, 1.0, 1.0)],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SelfPairing(Ion::Nitrate)));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = RuleConfig {
            thresholds: vec![ThresholdRule::new(Ion::OrthoPhosphate, -0.01)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: RuleConfig = serde_json::from_str(r#"{"tolerance": 0.2}"#).unwrap();
        assert_eq!(config.tolerance, 0.2);
        assert_eq!(config.ratios.len(), 3);
        assert_eq!(config.thresholds.len(), 2);
    }
}
