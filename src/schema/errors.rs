//! Validation failure reporting.
//!
//! Rule failures are never thrown: they are collected into a per-field
//! mapping and handed back to the caller. Retrying is pointless, the
//! evaluation is deterministic; only a different input can change the
//! outcome.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::record::Field;

/// A single field validation failure: the field plus its fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    /// The field whose rule failed.
    pub field: Field,
    /// The failed rule's message, verbatim.
    pub message: &'static str,
}

/// Per-field failure mapping: at most one message per field, the first
/// failing rule in that field's table.
///
/// Iterates in form order (see [`Field`]). Fields that passed contribute
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a failure for `field` unless one is already present.
    pub(crate) fn record(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    /// Returns the message recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Returns whether a failure was recorded for `field`.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = FieldViolation> + '_ {
        self.0.iter().map(|(field, message)| FieldViolation {
            field: *field,
            message: *message,
        })
    }

    /// The wire names of the failing fields, in form order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.0.keys().map(Field::as_str).collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}
