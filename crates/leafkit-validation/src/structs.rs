//! Required/optional field validation.

use leafkit_core::{Error, Result};

use crate::fields::{FieldValue, Fields};

#[derive(Default)]
struct Findings {
    required: Vec<String>,
    optional: Vec<String>,
}

/// Check every field of `value` for emptiness.
///
/// Field paths are `prefix` followed by the field name; nested struct fields
/// are joined with `.` (`database.url`). Emptiness is [`IsZero`].
///
/// - A required empty field is an error. All of them are collected and
///   reported together in [`Error::RequiredFieldsEmpty`].
/// - Optional empty fields are returned, in declaration order.
/// - Fields inside an optional nested struct are all treated as optional.
///
/// [`IsZero`]: leafkit_core::IsZero
pub fn validate_struct_fields<T: Fields>(value: &T, prefix: &str) -> Result<Vec<String>> {
    let mut findings = Findings::default();
    collect(value, prefix, true, &mut findings);

    if !findings.required.is_empty() {
        log::debug!("Required fields empty: {:?}", findings.required);
        return Err(Error::RequiredFieldsEmpty(findings.required));
    }
    Ok(findings.optional)
}

fn collect(value: &dyn Fields, prefix: &str, enforce: bool, findings: &mut Findings) {
    for field in value.fields() {
        let path = format!("{prefix}{}", field.name);
        let enforce_field = enforce && field.required;
        match field.value {
            FieldValue::Leaf(leaf) if leaf.is_zero() => {
                if enforce_field {
                    findings.required.push(path);
                } else {
                    findings.optional.push(path);
                }
            }
            FieldValue::Leaf(_) => {}
            FieldValue::Nested(inner) => {
                collect(inner, &format!("{path}."), enforce_field, findings);
            }
        }
    }
}
