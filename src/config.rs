//! Configuration management for the neck posture estimator

use crate::{
    assessment::PostureAssessor,
    constants::{DEFAULT_MAX_GOOD_ANGLE, DEFAULT_PERFECT_ANGLE, DEFAULT_PRESENCE_THRESHOLD},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model configuration
    pub model: ModelConfig,

    /// Pose detection configuration
    pub detection: DetectionConfig,

    /// Posture judgment thresholds
    pub assessment: AssessmentConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Model file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the pose landmark ONNX model
    pub pose_landmarks: PathBuf,

    /// Square model input size; read from the model when absent
    pub input_size: Option<u32>,
}

/// Pose detection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum pose presence score (0.0-1.0)
    pub presence_threshold: f32,
}

/// Posture judgment thresholds in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Largest head-forward angle still considered good
    pub max_good_angle: f64,

    /// Angles up to this value are rated perfect
    pub perfect_angle: f64,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON responses
    pub pretty: bool,

    /// Directory for annotated copies of the input images
    pub annotate_dir: Option<PathBuf>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            pose_landmarks: PathBuf::from("assets/pose_landmark_full.onnx"),
            input_size: None,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            presence_threshold: DEFAULT_PRESENCE_THRESHOLD,
        }
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            max_good_angle: DEFAULT_MAX_GOOD_ANGLE,
            perfect_angle: DEFAULT_PERFECT_ANGLE,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Build the posture assessor described by this configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the thresholds are inconsistent
    pub fn assessor(&self) -> Result<PostureAssessor> {
        PostureAssessor::new(self.assessment.max_good_angle, self.assessment.perfect_angle)
            .map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Validate configuration values without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detection.presence_threshold) {
            return Err(Error::ConfigError(
                "Presence threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.model.input_size == Some(0) {
            return Err(Error::ConfigError("Model input size must be greater than 0".to_string()));
        }

        self.assessor()?;

        Ok(())
    }

    /// Validate configuration and check that the model file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is invalid or the model is missing
    pub fn validate_with_model(&self) -> Result<()> {
        self.validate()?;

        if !self.model.pose_landmarks.exists() {
            return Err(Error::ConfigError(format!(
                "Pose landmark model not found: {}",
                self.model.pose_landmarks.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Neck Posture Configuration

# Model files
model:
  pose_landmarks: "assets/pose_landmark_full.onnx"
  # input_size: 256

# Pose detection parameters
detection:
  presence_threshold: 0.5

# Posture judgment (degrees of head-forward angle)
assessment:
  max_good_angle: 25.0
  perfect_angle: 5.0

# Output settings
output:
  pretty: false
  # annotate_dir: "annotated"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let parsed = Config::from_yaml(EXAMPLE_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("assessment:\n  max_good_angle: 30.0\n").unwrap();

        assert!((config.assessment.max_good_angle - 30.0).abs() < f64::EPSILON);
        assert!((config.assessment.perfect_angle - DEFAULT_PERFECT_ANGLE).abs() < f64::EPSILON);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = Config::default();
        config.detection.presence_threshold = 1.5;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::default();
        config.assessment.perfect_angle = 95.0;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::default();
        config.model.input_size = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Config::from_yaml("assessment: [not, a, map]");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_missing_model() {
        let mut config = Config::default();
        config.model.pose_landmarks = PathBuf::from("/nonexistent/pose.onnx");
        match config.validate_with_model() {
            Err(Error::ConfigError(msg)) => assert!(msg.contains("not found")),
            _ => panic!("Expected ConfigError"),
        }
    }
}
