pub mod artifact;
pub mod inference;

pub use artifact::{DiseaseModel, ModelFile, DEFAULT_MODEL_PATH};

use crate::error::AppError;
use crate::models::predict_types::{ClassLabel, FeatureVector};

/// A loaded model that maps one feature row to an integer class label.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, AppError>;
}

/// Produces a classifier on demand. Each prediction attempt loads a fresh
/// instance; nothing is cached between attempts.
pub trait ClassifierSource {
    type Model: Classifier;

    fn load(&self) -> Result<Self::Model, AppError>;
}
