//! Observability for the signup pipeline.
//!
//! Structured JSON logging only; no metrics, no spans.

mod logger;

pub use logger::{log_event, log_event_to, Severity};
