use std::collections::HashMap;

use crate::error::AppError;
use crate::models::field_types::{FieldKind, FieldSpec, FIELDS, FIELD_COUNT};
use crate::models::predict_types::InputValue;

/// Check every raw field value against its declared rule, in declaration
/// order, stopping at the first failure. On success the returned set carries
/// one validated scalar per field. Missing fields are treated as empty input.
pub fn validate(raw: &HashMap<String, String>) -> Result<InputValue, AppError> {
    let mut values = [0.0f64; FIELD_COUNT];
    for (idx, spec) in FIELDS.iter().enumerate() {
        let text = raw.get(spec.name).map(String::as_str).unwrap_or("");
        values[idx] = validate_field(spec, text)?;
    }
    Ok(InputValue::new(values))
}

fn validate_field(spec: &FieldSpec, raw: &str) -> Result<f64, AppError> {
    match spec.kind {
        FieldKind::Choice { options } => match options.iter().position(|opt| *opt == raw) {
            Some(0) => Ok(1.0),
            Some(_) => Ok(0.0),
            None => Err(AppError::Parse { field: spec.name }),
        },
        FieldKind::Numeric { min, max } => {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| AppError::Parse { field: spec.name })?;
            // NaN compares false on both sides, so it lands in the error arm.
            if !(min..=max).contains(&value) {
                return Err(AppError::Range {
                    field: spec.name,
                    min,
                    max,
                });
            }
            Ok(value)
        }
    }
}
