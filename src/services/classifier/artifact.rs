use linfa_trees::DecisionTree;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::services::classifier::ClassifierSource;

/// Where the trained artifact is expected when no path is configured.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// The trained classifier as stored on disk: a fitted decision tree over the
/// nine-column feature layout. Training happens elsewhere; this crate only
/// deserializes and runs the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseModel {
    pub(crate) tree: DecisionTree<f64, usize>,
}

impl DiseaseModel {
    pub fn new(tree: DecisionTree<f64, usize>) -> Self {
        Self { tree }
    }
}

/// Classifier source backed by a single artifact file. A `.json` extension
/// selects the JSON codec, anything else is read as MessagePack.
#[derive(Debug, Clone)]
pub struct ModelFile {
    path: PathBuf,
}

impl ModelFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_available(&self) -> bool {
        self.path.is_file()
    }
}

impl ClassifierSource for ModelFile {
    type Model = DiseaseModel;

    fn load(&self) -> Result<DiseaseModel, AppError> {
        if !self.path.is_file() {
            return Err(AppError::ModelUnavailable {
                path: self.path.clone(),
                detail: "file not found".to_string(),
            });
        }

        let bytes = std::fs::read(&self.path).map_err(|e| AppError::ModelUnavailable {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;

        let model = match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_slice(&bytes).map_err(|e| AppError::ModelUnavailable {
                    path: self.path.clone(),
                    detail: format!("invalid JSON artifact: {}", e),
                })?
            }
            _ => rmp_serde::from_slice(&bytes).map_err(|e| AppError::ModelUnavailable {
                path: self.path.clone(),
                detail: format!("invalid MessagePack artifact: {}", e),
            })?,
        };

        log::debug!("loaded classifier artifact from {}", self.path.display());
        Ok(model)
    }
}
