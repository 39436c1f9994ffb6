//! Email syntax checking.
//!
//! The accepted grammar matches the rule the original form applied: a
//! restricted local part, an `@`, and one or more domain labels ending in
//! an alphabetic top-level domain. Written without lookaround so it runs
//! on the `regex` engine.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local part: dot-separated runs of `[A-Z0-9_'+-]`, final character
/// restricted to `[A-Z0-9_+-]`. Rejects a leading dot, consecutive dots,
/// and a trailing dot before the `@`. Domain: labels starting
/// alphanumeric, then a TLD of at least two letters. Case-insensitive.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([A-Z0-9_'+-]+\.)*[A-Z0-9_'+-]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$",
    )
    .expect("email pattern compiles")
});

/// Returns whether `candidate` is a syntactically valid email address.
pub(crate) fn is_valid(candidate: &str) -> bool {
    EMAIL.is_match(candidate)
}
