//! Signup validation schema.
//!
//! Each field owns an ordered table of (predicate, message) rules. A
//! record is checked field by field; within a field, evaluation stops at
//! the first failing rule, so the result carries at most one message per
//! field.
//!
//! # Design Principles
//!
//! - Rules are plain data, walked in declared order
//! - Validation is deterministic and side-effect free
//! - Messages are fixed strings, part of the public contract
//! - Fields are independent; no cross-field rules

mod email;
mod errors;
pub mod rules;
mod validator;

pub use errors::{FieldErrors, FieldViolation};
pub use rules::{
    Rule, AGE_UNDER_MINIMUM, EMAIL_INVALID, FULL_NAME_TOO_SHORT, PASSWORD_TOO_LONG,
    PASSWORD_TOO_SHORT, USERNAME_FORBIDDEN_CHARS, USERNAME_TOO_LONG, USERNAME_TOO_SHORT,
};
pub use validator::{validate, Validation};
