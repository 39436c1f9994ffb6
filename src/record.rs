//! Signup record types.
//!
//! A `SignupInput` is transient: built by the caller at submission time,
//! consumed once by validation, and discarded. It carries no identity and
//! is never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five signup fields, in form order.
///
/// The derived `Ord` follows declaration order, so aggregated failures
/// iterate in the same order the form presents its inputs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    FullName,
    Age,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::FullName,
        Field::Age,
    ];

    /// Returns the wire name for this field (camelCase, matching serde).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::FullName => "fullName",
            Field::Age => "age",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate signup record.
///
/// Field types are guaranteed by construction (serde or the form binding);
/// the schema checks values, not shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_wire_names() {
        assert_eq!(Field::Username.as_str(), "username");
        assert_eq!(Field::Email.as_str(), "email");
        assert_eq!(Field::Password.as_str(), "password");
        assert_eq!(Field::FullName.as_str(), "fullName");
        assert_eq!(Field::Age.as_str(), "age");
    }

    #[test]
    fn test_field_order_is_form_order() {
        let mut sorted = Field::ALL;
        sorted.sort();
        assert_eq!(sorted, Field::ALL);
    }

    #[test]
    fn test_field_serializes_to_wire_name() {
        for field in Field::ALL {
            let value = serde_json::to_value(field).unwrap();
            assert_eq!(value, json!(field.as_str()));
        }
    }

    #[test]
    fn test_input_deserializes_from_camel_case() {
        let input: SignupInput = serde_json::from_value(json!({
            "username": "jane_doe1",
            "email": "jane@doe.com",
            "password": "abc",
            "fullName": "Jane Doe",
            "age": 20
        }))
        .unwrap();

        assert_eq!(input.full_name, "Jane Doe");
        assert_eq!(input.age, 20);
    }

    #[test]
    fn test_input_round_trips() {
        let input = SignupInput {
            username: "jane_doe1".into(),
            email: "jane@doe.com".into(),
            password: "abc".into(),
            full_name: "Jane Doe".into(),
            age: 20,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("full_name").is_none());

        let back: SignupInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }
}
