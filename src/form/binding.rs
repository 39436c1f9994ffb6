//! Raw value binding and submission.

use std::collections::BTreeMap;
use std::io::{self, Write};

use thiserror::Error;

use crate::observability::{log_event_to, Severity};
use crate::record::{Field, SignupInput};
use crate::schema::{validate, Validation};

/// Errors raised while building a record from raw form values.
///
/// These are shape failures caught before the schema runs; field rule
/// failures are always reported through the [`Validation`] mapping, never
/// through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// No value was bound for the field.
    #[error("no value bound for field '{0}'")]
    MissingValue(Field),
    /// The value is not a base-10 whole number.
    #[error("field '{0}' expects a whole number")]
    NotANumber(Field),
}

/// Raw string values bound per field.
///
/// Values arrive as the strings a user typed. [`build`](Self::build)
/// parses them into a typed record; [`submit`](Self::submit) runs the
/// record through the schema.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    values: BTreeMap<Field, String>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a raw value to `field`, replacing any previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        self.values.insert(field, value.into());
        self
    }

    /// Returns the raw value bound to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Builds the typed record from the bound values.
    ///
    /// All five fields must be bound. Age is parsed as a base-10 integer;
    /// every other field is taken verbatim.
    ///
    /// # Errors
    ///
    /// `MissingValue` for the first unbound field in form order, or
    /// `NotANumber` when the age value does not parse.
    pub fn build(&self) -> Result<SignupInput, FormError> {
        // Probe in form order so MissingValue names the first gap.
        for field in Field::ALL {
            if self.get(field).is_none() {
                return Err(FormError::MissingValue(field));
            }
        }

        let age: i64 = self.values[&Field::Age]
            .trim()
            .parse()
            .map_err(|_| FormError::NotANumber(Field::Age))?;

        Ok(SignupInput {
            username: self.values[&Field::Username].clone(),
            email: self.values[&Field::Email].clone(),
            password: self.values[&Field::Password].clone(),
            full_name: self.values[&Field::FullName].clone(),
            age,
        })
    }

    /// Builds the record and validates it, logging the outcome to stdout.
    ///
    /// The password value never reaches the log.
    ///
    /// # Errors
    ///
    /// Build failures only; rule failures come back inside the
    /// [`Validation`] value.
    pub fn submit(&self) -> Result<Validation, FormError> {
        self.submit_to(&mut io::stdout())
    }

    /// Like [`submit`](Self::submit), with the outcome logged to an
    /// arbitrary writer.
    pub fn submit_to<W: Write>(&self, log: &mut W) -> Result<Validation, FormError> {
        let input = self.build()?;
        let username = input.username.clone();
        let outcome = validate(input);

        match &outcome {
            Validation::Valid(_) => {
                log_event_to(
                    log,
                    Severity::Info,
                    "signup_accepted",
                    &[("username", username.as_str())],
                );
            }
            Validation::Invalid(errors) => {
                let fields = errors.field_names().join(",");
                log_event_to(
                    log,
                    Severity::Warn,
                    "signup_rejected",
                    &[
                        ("fields", fields.as_str()),
                        ("username", username.as_str()),
                    ],
                );
            }
        }

        Ok(outcome)
    }
}
