use std::cell::Cell;
use std::collections::HashMap;

use linfa::traits::Fit;
use linfa::DatasetBase;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use hepascan::{
    predict_disease, validate, AppError, ClassLabel, Classifier, ClassifierSource, DiseaseModel,
    FeatureVector, ModelFile, Severity, FIELD_COUNT,
};

fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn healthy_form() -> HashMap<String, String> {
    form(&[
        ("Age", "45"),
        ("Gender", "Male"),
        ("Total_Bilirubin", "1.2"),
        ("Alkaline_Phosphotase", "150"),
        ("Alamine_Aminotransferase", "40"),
        ("Aspartate_Aminotransferase", "35"),
        ("Total_Protiens", "6.5"),
        ("Albumin", "3.5"),
        ("Albumin_and_Globulin_Ratio", "1.0"),
    ])
}

struct FixedLabel(ClassLabel);

impl Classifier for FixedLabel {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, AppError> {
        Ok(self.0)
    }
}

struct FixedSource(ClassLabel);

impl ClassifierSource for FixedSource {
    type Model = FixedLabel;

    fn load(&self) -> Result<FixedLabel, AppError> {
        Ok(FixedLabel(self.0))
    }
}

/// Records whether anything ever asked it for a model.
struct ProbeSource {
    loaded: Cell<bool>,
}

impl ProbeSource {
    fn new() -> Self {
        Self {
            loaded: Cell::new(false),
        }
    }
}

impl ClassifierSource for ProbeSource {
    type Model = FixedLabel;

    fn load(&self) -> Result<FixedLabel, AppError> {
        self.loaded.set(true);
        Ok(FixedLabel(1))
    }
}

// Trains a small tree whose only informative column is Total_Bilirubin;
// every other column is constant across the training rows, so the fitted
// tree must split on bilirubin alone.
fn trained_model() -> DiseaseModel {
    let base = [45.0, 1.0, 0.0, 150.0, 40.0, 35.0, 6.5, 3.5, 1.0];
    let bilirubin = [0.3, 0.8, 1.2, 1.8, 6.0, 7.0, 8.5, 9.5];
    let labels = [1usize, 1, 1, 1, 2, 2, 2, 2];

    let mut flat = Vec::with_capacity(bilirubin.len() * FIELD_COUNT);
    for value in bilirubin {
        let mut row = base;
        row[2] = value;
        flat.extend_from_slice(&row);
    }
    let records = Array2::from_shape_vec((bilirubin.len(), FIELD_COUNT), flat).unwrap();
    let dataset = DatasetBase::from(records).with_targets(Array1::from_iter(labels));
    let tree = DecisionTree::params()
        .max_depth(Some(3))
        .fit(&dataset)
        .unwrap();
    DiseaseModel::new(tree)
}

#[test]
fn valid_form_produces_ordered_feature_vector() {
    let values = validate(&healthy_form()).unwrap();
    assert_eq!(
        values.feature_vector().values(),
        [45.0, 1.0, 1.2, 150.0, 40.0, 35.0, 6.5, 3.5, 1.0]
    );
}

#[test]
fn out_of_range_age_stops_before_the_classifier() {
    let mut raw = healthy_form();
    raw.insert("Age".to_string(), "150".to_string());
    let source = ProbeSource::new();
    let err = predict_disease(&source, &raw).unwrap_err();
    assert_eq!(
        err,
        AppError::Range {
            field: "Age",
            min: 18.0,
            max: 100.0
        }
    );
    assert!(!source.loaded.get());
}

#[test]
fn label_two_is_the_positive_verdict() {
    let result = predict_disease(&FixedSource(2), &healthy_form()).unwrap();
    assert_eq!(result.label, 2);
    assert_eq!(result.verdict.text, "LIVER DISEASE present");
    assert_eq!(result.verdict.severity, Severity::Positive);
}

#[test]
fn any_other_label_is_the_negative_verdict() {
    for label in [0, 1, 3] {
        let result = predict_disease(&FixedSource(label), &healthy_form()).unwrap();
        assert_eq!(result.label, label);
        assert_eq!(result.verdict.text, "HEALTHY");
        assert_eq!(result.verdict.severity, Severity::Negative);
    }
}

#[test]
fn missing_artifact_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let source = ModelFile::new(dir.path().join("model.json"));
    let err = predict_disease(&source, &healthy_form()).unwrap_err();
    assert!(matches!(err, AppError::ModelUnavailable { .. }));
}

#[test]
fn json_artifact_round_trips_through_the_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, serde_json::to_vec(&trained_model()).unwrap()).unwrap();

    let source = ModelFile::new(&path);

    let healthy = predict_disease(&source, &healthy_form()).unwrap();
    assert_eq!(healthy.label, 1);
    assert_eq!(healthy.verdict.text, "HEALTHY");

    let mut raw = healthy_form();
    raw.insert("Total_Bilirubin".to_string(), "8.0".to_string());
    let diseased = predict_disease(&source, &raw).unwrap();
    assert_eq!(diseased.label, 2);
    assert_eq!(diseased.verdict.text, "LIVER DISEASE present");
}

#[test]
fn msgpack_artifact_round_trips_through_the_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.msgpack");
    std::fs::write(&path, rmp_serde::to_vec(&trained_model()).unwrap()).unwrap();

    let source = ModelFile::new(&path);
    let result = predict_disease(&source, &healthy_form()).unwrap();
    assert_eq!(result.label, 1);
    assert_eq!(result.verdict.text, "HEALTHY");
}
