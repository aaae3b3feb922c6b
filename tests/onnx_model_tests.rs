//! Tests for ONNX model loading and inference

mod test_helpers;

use neck_posture::{
    pose_detection::PoseLandmarkDetector,
    processor::PostureProcessor,
    provider::LandmarkProvider,
    Result,
};
use std::path::Path;
use test_helpers::png_bytes;

const MODEL_PATH: &str = "assets/pose_landmark_full.onnx";

#[test]
#[ignore = "Requires ONNX models"]
fn test_load_pose_landmark_model() -> Result<()> {
    assert!(Path::new(MODEL_PATH).exists(), "Pose landmark model not found");

    let detector = PoseLandmarkDetector::new(MODEL_PATH, 0.5)?;
    assert!(detector.input_size() > 0);

    Ok(())
}

#[test]
#[ignore = "Requires ONNX models"]
fn test_blank_image_inference() -> Result<()> {
    let mut detector = PoseLandmarkDetector::new(MODEL_PATH, 0.5)?;

    // Inference on an empty frame must complete; finding nobody is expected
    let landmarks = detector.detect(&image::RgbImage::new(640, 480))?;
    if let Some(set) = landmarks {
        assert_eq!(set.as_slice().len(), 33);
    }

    Ok(())
}

#[test]
#[ignore = "Requires ONNX models"]
fn test_processor_with_model() -> Result<()> {
    let detector = PoseLandmarkDetector::new(MODEL_PATH, 0.5)?;
    let mut processor = PostureProcessor::new(detector);

    let response = processor.respond(&png_bytes(320, 240));
    let json = serde_json::to_value(&response)?;
    assert!(json.get("error").is_some() || json.get("angles").is_some());

    Ok(())
}

#[test]
#[ignore = "Requires ONNX Runtime"]
fn test_missing_model_file() {
    let result = PoseLandmarkDetector::new("/nonexistent/pose.onnx", 0.5);
    assert!(result.is_err());
}
