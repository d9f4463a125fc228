use linfa::{traits::Predict, DatasetBase};
use ndarray::Array2;

use crate::error::AppError;
use crate::models::field_types::FIELD_COUNT;
use crate::models::predict_types::{ClassLabel, FeatureVector};
use crate::services::classifier::artifact::DiseaseModel;
use crate::services::classifier::Classifier;

impl Classifier for DiseaseModel {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, AppError> {
        let row = Array2::from_shape_vec((1, FIELD_COUNT), features.as_slice().to_vec()).map_err(
            |e| AppError::Inference {
                message: format!("Failed to shape feature row: {}", e),
            },
        )?;
        let dataset = DatasetBase::from(row);
        let predictions = self.tree.predict(&dataset);
        predictions
            .first()
            .copied()
            .ok_or_else(|| AppError::Inference {
                message: "Model produced no outputs".to_string(),
            })
    }
}
