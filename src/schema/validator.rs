//! Schema evaluation.

use crate::record::{Field, SignupInput};

use super::errors::FieldErrors;
use super::rules::{
    first_failure, AGE_RULES, EMAIL_RULES, FULL_NAME_RULES, PASSWORD_RULES, USERNAME_RULES,
};

/// Outcome of schema evaluation.
///
/// A valid record is handed back to the caller untouched; an invalid one
/// is dropped and replaced by the per-field failure mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every field rule passed; the record is returned to the caller.
    Valid(SignupInput),
    /// At least one field failed; one message per failing field.
    Invalid(FieldErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// The accepted record, if validation passed.
    pub fn into_input(self) -> Option<SignupInput> {
        match self {
            Validation::Valid(input) => Some(input),
            Validation::Invalid(_) => None,
        }
    }

    /// The failure mapping, if validation failed.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }
}

/// Validates a signup record against the field schema.
///
/// Fields are checked independently; within a field, rules run in declared
/// order and the first failure wins. Pure and reentrant: no I/O, no shared
/// state, equal inputs produce equal results.
pub fn validate(input: SignupInput) -> Validation {
    let mut errors = FieldErrors::new();

    let failures = [
        (Field::Username, first_failure(input.username.as_str(), &USERNAME_RULES)),
        (Field::Email, first_failure(input.email.as_str(), &EMAIL_RULES)),
        (Field::Password, first_failure(input.password.as_str(), &PASSWORD_RULES)),
        (Field::FullName, first_failure(input.full_name.as_str(), &FULL_NAME_RULES)),
        (Field::Age, first_failure(&input.age, &AGE_RULES)),
    ];

    for (field, failure) in failures {
        if let Some(message) = failure {
            errors.record(field, message);
        }
    }

    if errors.is_empty() {
        Validation::Valid(input)
    } else {
        Validation::Invalid(errors)
    }
}
