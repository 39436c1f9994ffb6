//! Field rule tables.
//!
//! One ordered table per field. Each entry pairs a predicate with the
//! message surfaced when the predicate fails; within a table the first
//! failing entry wins and later entries are not evaluated.
//!
//! The message strings are part of the observable contract and must not
//! change: callers display them verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

use super::email;

/// A single field rule: a predicate over the field value and the message
/// reported when the predicate does not hold.
pub struct Rule<T: ?Sized + 'static> {
    /// Returns true when the value satisfies this rule.
    pub check: fn(&T) -> bool,
    /// Message surfaced when the check fails.
    pub message: &'static str,
}

pub const USERNAME_TOO_SHORT: &str = "username must be greater than 3 characters";
pub const USERNAME_TOO_LONG: &str = "username must not be greater than 16 characters";
pub const USERNAME_FORBIDDEN_CHARS: &str =
    "The username must contain only letters, numbers and underscore (_)";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT: &str = "password must be greater than 3 characters";
pub const PASSWORD_TOO_LONG: &str = "password must not be greater than 16 characters";
pub const FULL_NAME_TOO_SHORT: &str = "full name must be greater than 3 characters";
pub const AGE_UNDER_MINIMUM: &str = "You must be 18 years old or older";

/// Username: 3-16 characters, letters, digits and underscore only.
pub static USERNAME_RULES: [Rule<str>; 3] = [
    Rule {
        check: username_min,
        message: USERNAME_TOO_SHORT,
    },
    Rule {
        check: username_max,
        message: USERNAME_TOO_LONG,
    },
    Rule {
        check: username_charset,
        message: USERNAME_FORBIDDEN_CHARS,
    },
];

/// Email: syntactic validity only; no deliverability check.
pub static EMAIL_RULES: [Rule<str>; 1] = [Rule {
    check: email_syntax,
    message: EMAIL_INVALID,
}];

/// Password: 3-16 characters. No charset requirement.
pub static PASSWORD_RULES: [Rule<str>; 2] = [
    Rule {
        check: password_min,
        message: PASSWORD_TOO_SHORT,
    },
    Rule {
        check: password_max,
        message: PASSWORD_TOO_LONG,
    },
];

/// Full name: at least 3 characters.
pub static FULL_NAME_RULES: [Rule<str>; 1] = [Rule {
    check: full_name_min,
    message: FULL_NAME_TOO_SHORT,
}];

/// Age: 18 or older.
pub static AGE_RULES: [Rule<i64>; 1] = [Rule {
    check: age_minimum,
    message: AGE_UNDER_MINIMUM,
}];

/// Walks a rule table in order and returns the first failing rule's
/// message, or `None` when every rule passes.
pub(crate) fn first_failure<T: ?Sized>(value: &T, table: &[Rule<T>]) -> Option<&'static str> {
    table
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern compiles"));

/// Length in Unicode scalar values, the unit every length rule uses.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn username_min(value: &str) -> bool {
    char_len(value) >= 3
}

fn username_max(value: &str) -> bool {
    char_len(value) <= 16
}

fn username_charset(value: &str) -> bool {
    USERNAME.is_match(value)
}

fn email_syntax(value: &str) -> bool {
    email::is_valid(value)
}

fn password_min(value: &str) -> bool {
    char_len(value) >= 3
}

fn password_max(value: &str) -> bool {
    char_len(value) <= 16
}

fn full_name_min(value: &str) -> bool {
    char_len(value) >= 3
}

fn age_minimum(age: &i64) -> bool {
    *age >= 18
}
