pub mod field_types;
pub mod predict_types;
