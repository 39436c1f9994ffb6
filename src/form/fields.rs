//! Field descriptors for the signup form.

use crate::record::Field;

/// Input widget kind for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Email input.
    Email,
    /// Masked password input.
    Password,
    /// Whole-number input.
    Number,
}

/// Descriptor for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    /// Placeholder text shown in the empty input.
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

/// The five signup fields, in the order the form presents them.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        field: Field::Username,
        placeholder: "Username",
        kind: FieldKind::Text,
    },
    FieldSpec {
        field: Field::Email,
        placeholder: "E-mail",
        kind: FieldKind::Email,
    },
    FieldSpec {
        field: Field::Password,
        placeholder: "Password",
        kind: FieldKind::Password,
    },
    FieldSpec {
        field: Field::FullName,
        placeholder: "Full name",
        kind: FieldKind::Text,
    },
    FieldSpec {
        field: Field::Age,
        placeholder: "Age",
        kind: FieldKind::Number,
    },
];

/// Returns the descriptor for `field`.
pub fn spec_for(field: Field) -> &'static FieldSpec {
    // FIELDS is declared in Field's own order.
    &FIELDS[field as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors_cover_fields_in_form_order() {
        let declared: Vec<Field> = FIELDS.iter().map(|spec| spec.field).collect();
        assert_eq!(declared, Field::ALL.to_vec());
    }

    #[test]
    fn test_spec_for_matches_field() {
        for field in Field::ALL {
            assert_eq!(spec_for(field).field, field);
        }
    }

    #[test]
    fn test_age_is_a_number_input() {
        assert_eq!(spec_for(Field::Age).kind, FieldKind::Number);
        assert_eq!(spec_for(Field::Age).placeholder, "Age");
    }

    #[test]
    fn test_password_is_masked() {
        assert_eq!(spec_for(Field::Password).kind, FieldKind::Password);
    }
}
