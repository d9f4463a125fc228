use serde::Serialize;
use std::fmt;

use crate::models::field_types::{FIELDS, FIELD_COUNT};

/// Integer class code returned by the classifier.
pub type ClassLabel = usize;

/// The one label the trained model uses for the disease-present class.
/// Every other label maps to the healthy verdict.
pub const POSITIVE_LABEL: ClassLabel = 2;

/// A fully validated value set, one scalar per field in declaration order.
///
/// Only `validate` constructs this, so holding one means every field passed
/// its range check. Values never outlive the prediction attempt they were
/// entered for.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    values: [f64; FIELD_COUNT],
}

impl InputValue {
    pub(crate) fn new(values: [f64; FIELD_COUNT]) -> Self {
        Self { values }
    }

    /// Look up a validated value by field name.
    pub fn get(&self, field: &str) -> Option<f64> {
        FIELDS
            .iter()
            .position(|spec| spec.name == field)
            .map(|idx| self.values[idx])
    }

    /// Assemble the feature vector in the model's column order. The order is
    /// a contract with the trained classifier, not a convenience.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector(self.values)
    }
}

/// Ordered input row for the classifier:
/// [Age, Gender, Total_Bilirubin, Alkaline_Phosphotase,
/// Alamine_Aminotransferase, Aspartate_Aminotransferase, Total_Protiens,
/// Albumin, Albumin_and_Globulin_Ratio].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector(pub(crate) [f64; FIELD_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn values(&self) -> [f64; FIELD_COUNT] {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Positive,
    Negative,
}

/// User-facing outcome derived from the raw class label. The color tag is a
/// hint for the presentation layer, matching the severity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub text: &'static str,
    pub severity: Severity,
    pub color: &'static str,
}

impl Verdict {
    pub fn from_label(label: ClassLabel) -> Self {
        if label == POSITIVE_LABEL {
            Verdict {
                text: "LIVER DISEASE present",
                severity: Severity::Positive,
                color: "#e74c3c",
            }
        } else {
            Verdict {
                text: "HEALTHY",
                severity: Severity::Negative,
                color: "#2ecc71",
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: ClassLabel,
    pub verdict: Verdict,
}

impl PredictionResult {
    pub fn from_label(label: ClassLabel) -> Self {
        Self {
            label,
            verdict: Verdict::from_label(label),
        }
    }
}
