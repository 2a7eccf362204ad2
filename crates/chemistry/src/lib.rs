//! Water Chemistry Rules
//!
//! Evaluates aquarium ion readings against target ratios and absolute limits:
//! - calcium : magnesium and potassium : magnesium at 5 : 2
//! - total phosphate : nitrate at 1 : 16
//! - total phosphate above 0.05 mg/l and ortho-phosphate above 0.03 mg/l

pub mod config;
pub mod ion;
pub mod rules;
pub mod warning;

pub use config::{ConfigError, RatioRule, RuleConfig, ThresholdRule};
pub use ion::{Ion, Readings};
pub use rules::{evaluate, Band, RuleEngine};
pub use warning::{format_concentration, round2, Fragment, Remedy, Warning};
