//! Pose landmark detection with `ONNX` Runtime.

use crate::{
    constants::{DEFAULT_MODEL_INPUT_SIZE, LANDMARK_OUTPUT_STRIDE, NUM_POSE_LANDMARKS},
    error::Error,
    landmarks::{Landmark, LandmarkSet},
    provider::LandmarkProvider,
    utils::{
        image_conversion::{letterbox, rgb_to_nhwc_tensor, Letterbox},
        sigmoid,
    },
    Result,
};
use image::RgbImage;
use ndarray::{Array4, CowArray};
use ort::{Environment, Session, Value};
use std::path::Path;
use std::sync::Arc;

/// Pose landmark detector running a BlazePose-style model with `ONNX` Runtime.
///
/// The model takes a square NHWC RGB image normalized to `[0, 1]` and yields
/// five values per landmark (x, y, z in input pixels, visibility logit,
/// presence logit) plus an optional pose presence score.
pub struct PoseLandmarkDetector {
    session: Session,
    input_size: u32,
    presence_threshold: f32,
}

impl PoseLandmarkDetector {
    /// Create a new detector from an `ONNX` model file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The ONNX model file cannot be loaded
    /// - The model has no inputs or outputs
    /// - The ONNX runtime environment cannot be created
    pub fn new<P: AsRef<Path>>(model_path: P, presence_threshold: f32) -> Result<Self> {
        log::info!(
            "Initializing PoseLandmarkDetector with model: {}",
            model_path.as_ref().display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("pose_landmarks")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(model_path)?;

        let input_meta = session
            .inputs
            .first()
            .ok_or_else(|| Error::ModelInputError("Model has no inputs".to_string()))?;
        if session.outputs.is_empty() {
            return Err(Error::ModelOutputError("Model has no outputs".to_string()));
        }

        // Input shape is [batch, height, width, channels]
        let input_size = input_meta
            .dimensions
            .get(1)
            .copied()
            .flatten()
            .unwrap_or(DEFAULT_MODEL_INPUT_SIZE);
        log::debug!("Model input '{}' size {}", input_meta.name, input_size);

        Ok(Self {
            session,
            input_size,
            presence_threshold,
        })
    }

    /// Override the square input size reported by the model
    #[must_use]
    pub fn with_input_size(mut self, input_size: u32) -> Self {
        self.input_size = input_size;
        self
    }

    /// Square input size fed to the model
    #[must_use]
    pub const fn input_size(&self) -> u32 {
        self.input_size
    }

    /// Run the model and return every output flattened
    fn forward(&self, input: Array4<f32>) -> Result<Vec<Vec<f32>>> {
        let cow_array = CowArray::from(input.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;

        outputs
            .iter()
            .map(|output| -> Result<Vec<f32>> {
                let tensor = output.try_extract::<f32>()?;
                let values = tensor.view().iter().copied().collect();
                Ok(values)
            })
            .collect()
    }
}

impl LandmarkProvider for PoseLandmarkDetector {
    fn detect(&mut self, image: &RgbImage) -> Result<Option<LandmarkSet>> {
        let (input, placement) = letterbox(image, self.input_size)?;
        let outputs = self.forward(rgb_to_nhwc_tensor(&input))?;

        let presence = outputs.iter().find(|values| values.len() == 1).map(|values| values[0]);
        if let Some(score) = presence {
            if score < self.presence_threshold {
                log::debug!("Pose presence {score:.3} below threshold {}", self.presence_threshold);
                return Ok(None);
            }
        }

        let raw = outputs
            .iter()
            .find(|values| values.len() >= NUM_POSE_LANDMARKS * LANDMARK_OUTPUT_STRIDE)
            .ok_or_else(|| Error::ModelOutputError("No landmark output from model".to_string()))?;

        decode_landmarks(raw, &placement).map(Some)
    }
}

/// Convert raw model output into normalized landmarks of the source image
///
/// # Errors
///
/// Returns `ModelDataFormatError` if fewer than 33 landmarks are present
#[allow(clippy::cast_precision_loss)]
pub fn decode_landmarks(raw: &[f32], placement: &Letterbox) -> Result<LandmarkSet> {
    let needed = NUM_POSE_LANDMARKS * LANDMARK_OUTPUT_STRIDE;
    if raw.len() < needed {
        return Err(Error::ModelDataFormatError(format!(
            "Expected at least {needed} landmark values, got {}",
            raw.len()
        )));
    }

    let points: Vec<Landmark> = raw
        .chunks_exact(LANDMARK_OUTPUT_STRIDE)
        .take(NUM_POSE_LANDMARKS)
        .map(|values| {
            let (x, y) = placement.to_normalized(values[0], values[1]);
            // Depth shares the horizontal scale of the model input
            let z = values[2] / placement.input_size as f32;
            Landmark::new(x, y, z, sigmoid(values[3]))
        })
        .collect();

    LandmarkSet::from_slice(&points)
}
