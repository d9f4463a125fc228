use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::models::field_types::display_name;

/// Everything that can stop a prediction attempt. Each variant carries the
/// context the form needs to tell the user what to fix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AppError {
    /// The raw text for a field did not parse as a number, or an enumerated
    /// field received a value outside its choice list.
    Parse { field: &'static str },
    /// The parsed value fell outside the field's inclusive bounds.
    Range {
        field: &'static str,
        min: f64,
        max: f64,
    },
    /// The classifier artifact is missing or could not be decoded.
    ModelUnavailable { path: PathBuf, detail: String },
    /// The loaded classifier failed to produce a label.
    Inference { message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Parse { field } => {
                write!(f, "Please enter a valid number for {}", display_name(field))
            }
            AppError::Range { field, min, max } => {
                write!(
                    f,
                    "{} must be between {} and {}",
                    display_name(field),
                    min,
                    max
                )
            }
            AppError::ModelUnavailable { path, detail } => {
                write!(f, "Model file unavailable ({}): {}", path.display(), detail)
            }
            AppError::Inference { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_message_uses_spaced_field_name() {
        let err = AppError::Parse {
            field: "Total_Bilirubin",
        };
        assert_eq!(
            err.to_string(),
            "Please enter a valid number for Total Bilirubin"
        );
    }

    #[test]
    fn range_message_includes_bounds() {
        let err = AppError::Range {
            field: "Age",
            min: 18.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "Age must be between 18 and 100");
    }

    #[test]
    fn model_unavailable_names_the_path() {
        let err = AppError::ModelUnavailable {
            path: PathBuf::from("model.json"),
            detail: "file not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Model file unavailable (model.json): file not found"
        );
    }
}
