//! Neck posture estimation from a single image.
//!
//! The pipeline consists of:
//! 1. Decoding an uploaded image into an RGB pixel grid
//! 2. Detecting 33 body landmarks with a pre-trained pose model (`ONNX` Runtime)
//! 3. Measuring the head-forward angle between each shoulder-to-ear vector and
//!    the vertical, for every side whose landmarks are clearly visible
//! 4. Judging the angles against configurable thresholds
//!
//! The pose model sits behind the [`provider::LandmarkProvider`] trait, so the
//! angle logic can be driven by synthetic landmarks.
//!
//! # Examples
//!
//! ## Measuring landmarks
//!
//! ```
//! use neck_posture::{
//!     angle::compute_angles,
//!     landmarks::{Landmark, LandmarkSet, PoseLandmark},
//! };
//!
//! let mut landmarks = LandmarkSet::default();
//! landmarks.set(PoseLandmark::RightShoulder, Landmark::new(0.5, 0.6, 0.0, 1.0));
//! landmarks.set(PoseLandmark::RightEar, Landmark::new(0.6, 0.55, 0.0, 1.0));
//!
//! let angles = compute_angles(&landmarks).unwrap();
//! assert!(angles.left.is_none());
//! assert!((angles.right.unwrap() - 63.43).abs() < 0.01);
//! ```
//!
//! ## Processing an image
//!
//! ```no_run
//! use neck_posture::{pose_detection::PoseLandmarkDetector, processor::PostureProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = PoseLandmarkDetector::new("assets/pose_landmark_full.onnx", 0.5)?;
//! let mut processor = PostureProcessor::new(detector);
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let response = processor.respond(&bytes);
//! println!("{}", serde_json::to_string(&response)?);
//! # Ok(())
//! # }
//! ```

/// Body landmark types
pub mod landmarks;

/// Two-sided head-forward angle calculation
pub mod angle;

/// Superseded single-angle posture policy
pub mod legacy;

/// Good/bad posture judgment
pub mod assessment;

/// Landmark provider abstraction
pub mod provider;

/// Pose landmark detection with `ONNX` Runtime
pub mod pose_detection;

/// Single-image request pipeline
pub mod processor;

/// Skeleton overlay rendering
pub mod annotate;

/// Utility functions for image preparation and numeric conversions
pub mod utils;

/// Error types and result handling
pub mod error;

/// Command line application
pub mod app;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
