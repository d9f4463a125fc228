use serde::Serialize;

/// Number of input fields, and therefore the width of the feature vector.
pub const FIELD_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldKind {
    /// Free-text numeric input with inclusive bounds.
    Numeric { min: f64, max: f64 },
    /// One of a fixed list of choices. The first choice encodes to 1.0,
    /// every later choice to 0.0.
    Choice { options: &'static [&'static str] },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Input-box hint for numeric fields, e.g. `Range: 18-100`.
    pub fn placeholder(&self) -> Option<String> {
        match self.kind {
            FieldKind::Numeric { min, max } => Some(format!("Range: {}-{}", min, max)),
            FieldKind::Choice { .. } => None,
        }
    }
}

/// The nine clinical input fields, in the exact column order the trained
/// classifier expects. Reordering entries breaks the model contract.
/// `Total_Protiens` is misspelled on purpose: the model was trained on that
/// column name.
pub const FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        name: "Age",
        label: "Age (18-100)",
        kind: FieldKind::Numeric {
            min: 18.0,
            max: 100.0,
        },
    },
    FieldSpec {
        name: "Gender",
        label: "Gender",
        kind: FieldKind::Choice {
            options: &["Male", "Female"],
        },
    },
    FieldSpec {
        name: "Total_Bilirubin",
        label: "Total Bilirubin (0.1-10.0)",
        kind: FieldKind::Numeric { min: 0.1, max: 10.0 },
    },
    FieldSpec {
        name: "Alkaline_Phosphotase",
        label: "Alkaline Phosphotase (20-500)",
        kind: FieldKind::Numeric {
            min: 20.0,
            max: 500.0,
        },
    },
    FieldSpec {
        name: "Alamine_Aminotransferase",
        label: "Alamine Aminotransferase (10-200)",
        kind: FieldKind::Numeric {
            min: 10.0,
            max: 200.0,
        },
    },
    FieldSpec {
        name: "Aspartate_Aminotransferase",
        label: "Aspartate Aminotransferase (10-200)",
        kind: FieldKind::Numeric {
            min: 10.0,
            max: 200.0,
        },
    },
    FieldSpec {
        name: "Total_Protiens",
        label: "Total Proteins (1.0-10.0)",
        kind: FieldKind::Numeric { min: 1.0, max: 10.0 },
    },
    FieldSpec {
        name: "Albumin",
        label: "Albumin (1.0-8.0)",
        kind: FieldKind::Numeric { min: 1.0, max: 8.0 },
    },
    FieldSpec {
        name: "Albumin_and_Globulin_Ratio",
        label: "Albumin and Globulin Ratio (0.3-3.0)",
        kind: FieldKind::Numeric { min: 0.3, max: 3.0 },
    },
];

/// Field name as shown to the user in error messages.
pub fn display_name(field: &str) -> String {
    field.replace('_', " ")
}
