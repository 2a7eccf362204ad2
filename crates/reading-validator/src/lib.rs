//! Reading Validation
//!
//! Turns raw form input into [`Readings`]: every field is required, numeric,
//! finite and non-negative.

mod error;
mod form;
mod validator;

pub use chemistry::{Ion, Readings};
pub use error::{InvalidReadings, ValidationError};
pub use form::RawForm;
pub use validator::{parse_field, parse_form, validate, validate_value};
