use std::collections::HashMap;
use std::time::Instant;

use crate::error::AppError;
use crate::models::predict_types::{InputValue, PredictionResult};
use crate::services::classifier::{Classifier, ClassifierSource};
use crate::services::validation::validate;

/// Run one prediction: order the validated values into the model's column
/// layout, load a classifier from the source, and map its label to a verdict.
/// The classifier is loaded fresh on every call; nothing is cached.
pub fn predict(
    source: &impl ClassifierSource,
    values: &InputValue,
) -> Result<PredictionResult, AppError> {
    let features = values.feature_vector();
    let started = Instant::now();
    let model = source.load()?;
    let label = model.predict(&features)?;
    log::debug!("predicted label {} in {:?}", label, started.elapsed());
    Ok(PredictionResult::from_label(label))
}

/// Full pipeline from raw form text to verdict. A validation failure ends the
/// attempt before the classifier source is ever consulted.
pub fn predict_disease(
    source: &impl ClassifierSource,
    raw: &HashMap<String, String>,
) -> Result<PredictionResult, AppError> {
    let values = validate(raw)?;
    predict(source, &values)
}
