//! Signup form model.
//!
//! The form side of the crate: the five input fields as data, raw string
//! values bound per field, and submission through the validation schema.
//! The markup this models presented its inputs without ever wiring them to
//! the schema; here the binding is explicit and [`SignupForm::submit`] is
//! the single entry point from raw values to a validated record.

mod binding;
mod fields;

pub use binding::{FormError, SignupForm};
pub use fields::{spec_for, FieldKind, FieldSpec, FIELDS};
