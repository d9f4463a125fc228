//! Core pipeline of a liver disease screening form: nine clinical fields are
//! range-checked, encoded into the column order a pre-trained classifier
//! expects, and the returned class label is mapped to a healthy or diseased
//! verdict. Rendering the form and training the model live elsewhere.

mod error;
mod models;
mod services;

pub use error::AppError;
pub use models::field_types::{display_name, FieldKind, FieldSpec, FIELDS, FIELD_COUNT};
pub use models::predict_types::{
    ClassLabel, FeatureVector, InputValue, PredictionResult, Severity, Verdict, POSITIVE_LABEL,
};
pub use services::classifier::{
    Classifier, ClassifierSource, DiseaseModel, ModelFile, DEFAULT_MODEL_PATH,
};
pub use services::predictor::{predict, predict_disease};
pub use services::validation::validate;
