//! Field Parsing and Range Checking

use crate::error::{InvalidReadings, ValidationError};
use crate::form::RawForm;
use chemistry::{Ion, Readings};
use tracing::debug;

/// Check a numeric value for one ion
pub fn validate_value(ion: Ion, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::NotFinite { ion })
    } else if value < 0.0 {
        Err(ValidationError::Negative { ion, value })
    } else {
        // -0 becomes 0
        Ok(value.abs())
    }
}

/// Parse and check the raw text of one field
pub fn parse_field(ion: Ion, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { ion });
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        ion,
        raw: trimmed.to_string(),
    })?;

    validate_value(ion, value)
}

/// Parse all six fields, collecting every failure
pub fn parse_form(form: &RawForm) -> Result<Readings, InvalidReadings> {
    let mut readings = Readings::default();
    let mut errors = Vec::new();

    for ion in Ion::ALL {
        match parse_field(ion, form.get(ion)) {
            Ok(value) => readings.set(ion, value),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(readings)
    } else {
        debug!("Rejected form with {} invalid field(s)", errors.len());
        Err(InvalidReadings { errors })
    }
}

/// Check an already numeric reading set
pub fn validate(readings: &Readings) -> Result<(), InvalidReadings> {
    let errors: Vec<_> = Ion::ALL
        .into_iter()
        .filter_map(|ion| validate_value(ion, readings.get(ion)).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidReadings { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete_form() -> RawForm {
        RawForm {
            magnesium: "5".into(),
            calcium: "12.5".into(),
            potassium: " 12.5 ".into(),
            total_phosphate: "0.03".into(),
            ortho_phosphate: "0.02".into(),
            nitrate: "0.48".into(),
        }
    }

    #[test]
    fn test_valid_field() {
        assert_eq!(parse_field(Ion::Calcium, "12.5"), Ok(12.5));
        assert_eq!(parse_field(Ion::Calcium, "0"), Ok(0.0));
        assert_eq!(parse_field(Ion::Calcium, "1e1"), Ok(10.0));
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            parse_field(Ion::Nitrate, "   "),
            Err(ValidationError::MissingField { ion: Ion::Nitrate })
        );
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(
            parse_field(Ion::Magnesium, "12,5"),
            Err(ValidationError::NotANumber { ion: Ion::Magnesium, .. })
        ));
    }

    #[test]
    fn test_not_finite() {
        for raw in ["inf", "-inf", "NaN"] {
            assert_eq!(
                parse_field(Ion::Potassium, raw),
                Err(ValidationError::NotFinite { ion: Ion::Potassium }),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let value = parse_field(Ion::Calcium, "-0").unwrap();
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_negative() {
        assert_eq!(
            parse_field(Ion::Calcium, "-1"),
            Err(ValidationError::Negative {
                ion: Ion::Calcium,
                value: -1.0,
            })
        );
    }

    #[test]
    fn test_parse_form() {
        let readings = parse_form(&complete_form()).unwrap();
        assert_eq!(readings.potassium, 12.5);
        assert_eq!(readings.nitrate, 0.48);
    }

    #[test]
    fn test_parse_form_reports_every_field_in_order() {
        let form = complete_form()
            .with(Ion::Nitrate, "")
            .with(Ion::Magnesium, "abc");
        let err = parse_form(&form).unwrap_err();

        let ions: Vec<_> = err.errors.iter().map(|e| e.ion()).collect();
        assert_eq!(ions, vec![Ion::Magnesium, Ion::Nitrate]);
        assert!(err.to_string().contains("nitrate is required"));
    }

    #[test]
    fn test_validate_readings() {
        let readings = Readings {
            calcium: -0.5,
            nitrate: f64::NAN,
            ..Readings::default()
        };
        let err = validate(&readings).unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert!(validate(&Readings::default()).is_ok());
    }

    proptest! {
        #[test]
        fn non_negative_numbers_parse(value in 0.0f64..1.0e6) {
            prop_assert_eq!(parse_field(Ion::Calcium, &value.to_string()), Ok(value));
        }

        #[test]
        fn negative_numbers_rejected(value in -1.0e6f64..-1.0e-9) {
            let rejected = matches!(
                parse_field(Ion::Calcium, &value.to_string()),
                Err(ValidationError::Negative { .. })
            );
            prop_assert!(rejected);
        }
    }
}
