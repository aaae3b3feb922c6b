//! Command line application measuring posture in image files.

use crate::{
    annotate::annotate,
    assessment::PostureAssessor,
    config::Config,
    error::{Error, Result},
    pose_detection::PoseLandmarkDetector,
    processor::{PostureProcessor, PostureResponse},
    provider::LandmarkProvider,
};
use log::{info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Angle policy applied to each image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnglePolicy {
    /// Two-sided head-forward angle with thresholds
    #[default]
    HeadForward,
    /// Superseded single right-side direction check
    Legacy,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Images to measure
    pub inputs: Vec<PathBuf>,
    /// Angle policy
    pub policy: AnglePolicy,
    /// Directory for annotated images
    pub annotate_dir: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl AppConfig {
    /// Build an application configuration from file settings
    #[must_use]
    pub fn from_config(config: &Config, inputs: Vec<PathBuf>, policy: AnglePolicy) -> Self {
        Self {
            inputs,
            policy,
            annotate_dir: config.output.annotate_dir.clone(),
            pretty: config.output.pretty,
        }
    }
}

/// One line of application output
#[derive(Debug, Serialize)]
struct ImageResponse<'a> {
    image: &'a Path,
    #[serde(flatten)]
    response: &'a PostureResponse,
}

/// Counts of a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Images measured successfully
    pub succeeded: usize,
    /// Images that produced an error response
    pub failed: usize,
}

/// Main application struct
pub struct PostureApp<P> {
    config: AppConfig,
    processor: PostureProcessor<P>,
}

impl PostureApp<PoseLandmarkDetector> {
    /// Create an application backed by the ONNX pose landmark model
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the model cannot
    /// be loaded
    pub fn from_model(config: AppConfig, settings: &Config) -> Result<Self> {
        settings.validate_with_model()?;

        let mut detector =
            PoseLandmarkDetector::new(&settings.model.pose_landmarks, settings.detection.presence_threshold)?;
        if let Some(input_size) = settings.model.input_size {
            detector = detector.with_input_size(input_size);
        }
        info!("Pose model input size {}", detector.input_size());

        Ok(Self::new(config, detector, settings.assessor()?))
    }
}

impl<P: LandmarkProvider> PostureApp<P> {
    /// Create an application with any landmark provider
    pub fn new(config: AppConfig, provider: P, assessor: PostureAssessor) -> Self {
        Self {
            config,
            processor: PostureProcessor::with_assessor(provider, assessor),
        }
    }

    /// Measure every input and write one JSON response per image to `out`
    ///
    /// Per-image failures are reported in the output and counted; only
    /// failures to write the output abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the annotation directory cannot be created or the
    /// output cannot be written
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<RunSummary> {
        info!("Measuring {} image(s)", self.config.inputs.len());

        if let Some(dir) = &self.config.annotate_dir {
            std::fs::create_dir_all(dir)?;
        }

        let mut summary = RunSummary::default();
        let inputs = self.config.inputs.clone();
        for path in &inputs {
            let response = self.process_path(path);
            if response.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            let line = ImageResponse {
                image: path,
                response: &response,
            };
            let json = if self.config.pretty {
                serde_json::to_string_pretty(&line)?
            } else {
                serde_json::to_string(&line)?
            };
            writeln!(out, "{json}")?;
        }

        info!("Done: {} succeeded, {} failed", summary.succeeded, summary.failed);
        Ok(summary)
    }

    /// Measure one image file
    pub fn process_path(&mut self, path: &Path) -> PostureResponse {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return PostureResponse::from_error(&Error::Io(e)),
        };

        let (image, landmarks) = match self.processor.detect(&bytes) {
            Ok(detected) => detected,
            Err(e) => return PostureResponse::from_error(&e),
        };

        if let Some(dir) = &self.config.annotate_dir {
            let target = annotated_path(dir, path);
            if let Err(e) = annotate(&image, &landmarks).save(&target) {
                warn!("Failed to write {}: {}", target.display(), e);
            }
        }

        match self.config.policy {
            AnglePolicy::Legacy => PostureResponse::Legacy(self.processor.measure_legacy(landmarks)),
            AnglePolicy::HeadForward => match self.processor.measure(landmarks) {
                Ok(report) => PostureResponse::Success(report),
                Err(e) => PostureResponse::from_error(&e),
            },
        }
    }
}

/// Location of the annotated copy of `input` inside `dir`
#[must_use]
pub fn annotated_path(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "image".into(), |stem| stem.to_string_lossy());
    dir.join(format!("{stem}_annotated.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_path() {
        let path = annotated_path(Path::new("out"), Path::new("shots/desk.jpg"));
        assert_eq!(path, PathBuf::from("out/desk_annotated.png"));
    }

    #[test]
    fn test_app_config_from_settings() {
        let mut settings = Config::default();
        settings.output.pretty = true;
        let config = AppConfig::from_config(&settings, vec![PathBuf::from("a.png")], AnglePolicy::Legacy);

        assert!(config.pretty);
        assert_eq!(config.policy, AnglePolicy::Legacy);
        assert!(config.annotate_dir.is_none());
    }
}
