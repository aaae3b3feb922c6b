//! Configuration file round trips and validation

use neck_posture::{
    config::{Config, EXAMPLE_CONFIG},
    error::Error,
};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posture.yaml");

    let mut config = Config::default();
    config.assessment.max_good_angle = 18.0;
    config.output.annotate_dir = Some(PathBuf::from("annotated"));
    config.model.input_size = Some(224);
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.model.input_size, Some(224));
}

#[test]
fn test_example_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("example.yaml");
    std::fs::write(&path, EXAMPLE_CONFIG).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.validate().is_ok());
    assert!(config.model.input_size.is_none());
}

#[test]
fn test_missing_file() {
    let result = Config::from_file("/nonexistent/posture.yaml");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_assessor_from_config() {
    let config = Config::from_yaml("assessment:\n  max_good_angle: 40.0\n  perfect_angle: 10.0\n").unwrap();
    let assessor = config.assessor().unwrap();

    assert!((assessor.max_good_angle() - 40.0).abs() < f64::EPSILON);
    assert!((assessor.perfect_angle() - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_small_max_good_angle_override() {
    let mut config = Config::default();
    config.assessment.max_good_angle = 3.0;

    assert!(config.validate().is_ok());
    let assessor = config.assessor().unwrap();
    assert!((assessor.max_good_angle() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_out_of_range_threshold_rejected() {
    let config = Config::from_yaml("assessment:\n  max_good_angle: 120.0\n").unwrap();
    assert!(matches!(config.assessor(), Err(Error::ConfigError(_))));
    assert!(config.validate().is_err());
}

#[test]
fn test_model_validation_with_existing_file() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("pose.onnx");
    std::fs::write(&model, b"placeholder").unwrap();

    let mut config = Config::default();
    config.model.pose_landmarks = model;
    assert!(config.validate_with_model().is_ok());
}
