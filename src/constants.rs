//! Constants used throughout the library

/// Number of body landmarks in the BlazePose topology
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Values per landmark in the model output (x, y, z, visibility, presence)
pub const LANDMARK_OUTPUT_STRIDE: usize = 5;

/// Minimum visibility (exclusive) for an ear/shoulder pair to be measured
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Floor for the shoulder-to-ear vertical displacement
pub const MIN_VERTICAL_DISPLACEMENT: f64 = 0.001;

/// Lower bound (inclusive) of the negated legacy angle for good posture
pub const LEGACY_GOOD_MIN_DEGREES: f64 = 65.0;

/// Upper bound (inclusive) of the negated legacy angle for good posture
pub const LEGACY_GOOD_MAX_DEGREES: f64 = 100.0;

/// Default largest head-forward angle in degrees still rated good
pub const DEFAULT_MAX_GOOD_ANGLE: f64 = 25.0;

/// Default head-forward angle in degrees up to which posture is rated perfect
pub const DEFAULT_PERFECT_ANGLE: f64 = 5.0;

/// Default square input size of the pose landmark model
pub const DEFAULT_MODEL_INPUT_SIZE: u32 = 256;

/// Default pose presence threshold
pub const DEFAULT_PRESENCE_THRESHOLD: f32 = 0.5;

/// Image normalization scale for model input
pub const IMAGE_NORMALIZATION_SCALE: f32 = 255.0;

/// Radius in pixels of the landmark markers drawn on annotated images
pub const MARKER_RADIUS: i32 = 3;

/// RGB colour of annotation markers and skeleton lines
pub const OVERLAY_COLOR: [u8; 3] = [0, 255, 0];
