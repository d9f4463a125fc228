pub mod classifier;
pub mod predictor;
pub mod validation;
