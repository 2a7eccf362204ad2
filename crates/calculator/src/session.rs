//! Form Session

use crate::report::Report;
use crate::SessionError;
use chemistry::{Ion, Readings, RuleEngine, Warning};
use field_store::{FieldCache, FieldStore};
use reading_validator::{parse_form, RawForm};
use tracing::{debug, info};

/// Readings of one calculation and the warnings they produced
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub readings: Readings,
    pub warnings: Vec<Warning>,
}

impl Outcome {
    pub fn report(&self) -> Report {
        Report::new(self.warnings.clone())
    }
}

/// The six form fields, their remembered values, and the latest result
pub struct FormSession<S> {
    cache: FieldCache<S>,
    engine: RuleEngine,
    form: RawForm,
    outcome: Option<Outcome>,
}

impl<S: FieldStore> FormSession<S> {
    /// Open a session, restoring remembered field values
    pub fn open(store: S, engine: RuleEngine) -> Result<Self, SessionError> {
        let cache = FieldCache::new(store);

        let mut form = RawForm::default();
        for ion in Ion::ALL {
            let value: String = cache.load_or(ion.key(), String::new())?;
            form.set(ion, value);
        }

        info!("Opened form session (blank: {})", form.is_blank());
        Ok(Self {
            cache,
            engine,
            form,
            outcome: None,
        })
    }

    /// Current raw text of a field
    pub fn field(&self, ion: Ion) -> &str {
        self.form.get(ion)
    }

    pub fn form(&self) -> &RawForm {
        &self.form
    }

    /// Update and remember a field; any previous outcome no longer applies
    pub fn set_field(&mut self, ion: Ion, value: impl Into<String>) -> Result<(), SessionError> {
        let value = value.into();
        self.cache.save(ion.key(), &value)?;
        self.form.set(ion, value);

        if self.outcome.take().is_some() {
            debug!("Discarded outcome after {} changed", ion);
        }
        Ok(())
    }

    /// Validate the fields and evaluate them
    pub fn calculate(&mut self) -> Result<&Outcome, SessionError> {
        let readings = parse_form(&self.form)?;
        let warnings = self.engine.evaluate(&readings);

        info!("Calculated {} warning(s)", warnings.len());
        Ok(self.outcome.insert(Outcome { readings, warnings }))
    }

    /// Latest outcome, if the fields have not changed since
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Report for the latest outcome
    pub fn report(&self) -> Option<Report> {
        self.outcome.as_ref().map(Outcome::report)
    }

    /// Empty and forget every field
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.outcome = None;

        // The form mirrors the store even when a save fails partway
        for ion in Ion::ALL {
            self.cache.save(ion.key(), "")?;
            self.form.set(ion, "");
        }

        info!("Cleared form session");
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.cache.into_inner()
    }
}
