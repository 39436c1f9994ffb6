//! Structured JSON logging.
//!
//! - One log line = one event
//! - Deterministic key ordering: `event`, `severity`, then fields sorted
//!   by key
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations.
    Info,
    /// Rejected input; the caller can recover with a different input.
    Warn,
    /// Operation failures.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logs an event to stdout.
pub fn log_event(severity: Severity, event: &str, fields: &[(&str, &str)]) {
    log_event_to(&mut io::stdout(), severity, event, fields);
}

/// Logs an event to an arbitrary writer.
///
/// The whole line is written in a single call so concurrent writers never
/// interleave within a line.
pub fn log_event_to<W: Write>(
    writer: &mut W,
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
) {
    let mut line = String::with_capacity(128);

    line.push_str("{\"event\":\"");
    escape_into(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);

    for (key, value) in sorted {
        line.push_str(",\"");
        escape_into(&mut line, key);
        line.push_str("\":\"");
        escape_into(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");

    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

/// Escapes a string for embedding in a JSON value position.
fn escape_into(out: &mut String, raw: &str) {
    use fmt::Write as _;

    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        log_event_to(&mut buffer, severity, event, fields);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = capture(Severity::Info, "signup_accepted", &[("username", "jane_doe1")]);
        assert_eq!(
            line,
            "{\"event\":\"signup_accepted\",\"severity\":\"INFO\",\"username\":\"jane_doe1\"}\n"
        );
    }

    #[test]
    fn test_fields_are_sorted_by_key() {
        let line = capture(
            Severity::Warn,
            "signup_rejected",
            &[("username", "jane_doe1"), ("fields", "age,email")],
        );

        let fields_at = line.find("\"fields\"").unwrap();
        let username_at = line.find("\"username\"").unwrap();
        assert!(fields_at < username_at);
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = capture(
            Severity::Warn,
            "signup_rejected",
            &[("fields", "username,email"), ("username", "ja\"ne")],
        );

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["event"], "signup_rejected");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["username"], "ja\"ne");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        let line = capture(Severity::Error, "odd\u{1}input", &[("value", "a\nb\tc")]);
        assert!(line.contains("\\u0001"));
        assert!(line.contains("\\n"));
        assert!(line.contains("\\t"));
        // Exactly one physical line.
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }
}
