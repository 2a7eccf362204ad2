//! Rule Engine

use crate::config::{ConfigError, RatioRule, RuleConfig, ThresholdRule};
use crate::ion::Readings;
use crate::warning::{Remedy, Warning};
use tracing::{debug, info};

/// Acceptable window around an ideal value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// Band of relative width `tolerance` around `ideal`
    pub fn around(ideal: f64, tolerance: f64) -> Self {
        Self {
            min: ideal * (1.0 - tolerance),
            max: ideal * (1.0 + tolerance),
        }
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }
}

/// Evaluates readings against ratio and threshold rules
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RuleConfig,
}

impl RuleEngine {
    /// Create an engine from a validated rule set
    pub fn new(config: RuleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Creating rule engine with {} ratio and {} threshold rules",
            config.ratios.len(),
            config.thresholds.len()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Evaluate all rules; ratio pairs first, then thresholds, each in declared order
    pub fn evaluate(&self, readings: &Readings) -> Vec<Warning> {
        let mut warnings = Vec::new();

        for rule in &self.config.ratios {
            self.check_ratio(rule, readings, &mut warnings);
        }

        for rule in &self.config.thresholds {
            check_threshold(rule, readings, &mut warnings);
        }

        debug!("Evaluated {:?}: {} warning(s)", readings, warnings.len());
        warnings
    }

    fn check_ratio(&self, rule: &RatioRule, readings: &Readings, out: &mut Vec<Warning>) {
        let first = readings.get(rule.first);
        let second = readings.get(rule.second);

        // Each ideal comes straight from the other reading
        let ideal_first = second / rule.second_parts * rule.first_parts;
        let ideal_second = first / rule.first_parts * rule.second_parts;

        let first_band = Band::around(ideal_first, self.config.tolerance);
        let second_band = Band::around(ideal_second, self.config.tolerance);

        let mut push = |remedy: Remedy| {
            out.push(Warning::RatioImbalance {
                first: rule.first,
                second: rule.second,
                remedy,
                ideal_first,
                ideal_second,
            })
        };

        if first_band.is_below(first) || second_band.is_above(second) {
            push(Remedy::RaiseFirstLowerSecond);
        }

        if first_band.is_above(first) || second_band.is_below(second) {
            push(Remedy::LowerFirstRaiseSecond);
        }
    }
}

fn check_threshold(rule: &ThresholdRule, readings: &Readings, out: &mut Vec<Warning>) {
    if readings.get(rule.ion) > rule.limit {
        out.push(Warning::ThresholdExceeded {
            ion: rule.ion,
            limit: rule.limit,
        });
    }
}

/// Evaluate readings against the default rule set
pub fn evaluate(readings: &Readings) -> Vec<Warning> {
    RuleEngine::default().evaluate(readings)
}
