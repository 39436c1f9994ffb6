//! signup - A strict, deterministic signup validation library
//!
//! A candidate signup record is checked against a fixed, declarative field
//! schema; the result is either the accepted record or a per-field mapping
//! of first-failure messages.

pub mod form;
pub mod observability;
pub mod record;
pub mod schema;
