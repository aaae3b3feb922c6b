//! Single-image request pipeline.
//!
//! Decodes an uploaded image, runs the landmark provider, measures the
//! head-forward angles and judges them. Every failure is scoped to the one
//! request and can be rendered as an error response.

use crate::{
    angle::{compute_angles, AngleResult},
    assessment::{PostureAssessment, PostureAssessor},
    landmarks::LandmarkSet,
    legacy::{legacy_check_posture, legacy_neck_angle},
    provider::LandmarkProvider,
    utils::image_conversion::decode_rgb,
    Error, Result,
};
use image::RgbImage;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Successful measurement of one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureReport {
    /// Head-forward angles per visible side
    pub angles: AngleResult,
    /// Judgment of the angles
    pub assessment: PostureAssessment,
    /// All detected landmarks
    pub landmarks: LandmarkSet,
}

/// Result of the superseded single-angle policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyReport {
    /// Raw right shoulder-to-ear direction in degrees
    pub angle: f64,
    /// Human readable status
    pub status: String,
    /// Whether the posture is acceptable
    pub is_good: bool,
    /// All detected landmarks
    pub landmarks: LandmarkSet,
}

/// Wire shape of a request outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostureResponse {
    /// Measurement succeeded
    Success(PostureReport),
    /// Legacy measurement succeeded
    Legacy(LegacyReport),
    /// Request failed
    Failure {
        /// Description of the failure
        error: String,
    },
}

impl PostureResponse {
    /// Render a failed request
    pub fn from_error(error: &Error) -> Self {
        if error.is_request_error() {
            debug!("Request rejected: {error}");
        } else {
            warn!("Request failed: {error}");
        }
        Self::Failure {
            error: error.to_string(),
        }
    }

    /// Whether the request succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failure { .. })
    }
}

/// Runs requests against a landmark provider
pub struct PostureProcessor<P> {
    provider: P,
    assessor: PostureAssessor,
}

impl<P: LandmarkProvider> PostureProcessor<P> {
    /// Create a processor with default thresholds
    pub fn new(provider: P) -> Self {
        Self::with_assessor(provider, PostureAssessor::default())
    }

    /// Create a processor with custom thresholds
    pub const fn with_assessor(provider: P, assessor: PostureAssessor) -> Self {
        Self { provider, assessor }
    }

    /// Thresholds in use
    pub const fn assessor(&self) -> &PostureAssessor {
        &self.assessor
    }

    /// Decode `bytes` and detect the landmarks of the person in it
    ///
    /// # Errors
    ///
    /// Returns an error if decoding or detection fails, or `NoPoseDetected`
    /// if no person is found
    pub fn detect(&mut self, bytes: &[u8]) -> Result<(RgbImage, LandmarkSet)> {
        let image = decode_rgb(bytes)?;
        debug!("Decoded {}x{} image", image.width(), image.height());

        let landmarks = self.provider.detect(&image)?.ok_or(Error::NoPoseDetected)?;
        Ok((image, landmarks))
    }

    /// Measure an already detected landmark set
    ///
    /// # Errors
    ///
    /// Returns `NoReliableSide` if neither ear/shoulder pair is visible
    pub fn measure(&self, landmarks: LandmarkSet) -> Result<PostureReport> {
        let angles = compute_angles(&landmarks)?;
        let assessment = self.assessor.assess(&angles)?;
        debug!("Measured {:?}: {}", angles, assessment.status);

        Ok(PostureReport {
            angles,
            assessment,
            landmarks,
        })
    }

    /// Measure the head-forward posture in an encoded image
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded, the provider fails,
    /// no pose is detected, or no side is reliably visible
    pub fn process_image(&mut self, bytes: &[u8]) -> Result<PostureReport> {
        let (_, landmarks) = self.detect(bytes)?;
        self.measure(landmarks)
    }

    /// Measure an encoded image with the superseded single-angle policy
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded, the provider fails,
    /// or no pose is detected
    pub fn process_image_legacy(&mut self, bytes: &[u8]) -> Result<LegacyReport> {
        let (_, landmarks) = self.detect(bytes)?;
        Ok(self.measure_legacy(landmarks))
    }

    /// Judge an already detected landmark set with the legacy policy
    #[allow(clippy::unused_self)] // Kept on the processor alongside `measure`
    pub fn measure_legacy(&self, landmarks: LandmarkSet) -> LegacyReport {
        let angle = legacy_neck_angle(&landmarks);
        let verdict = legacy_check_posture(angle);

        LegacyReport {
            angle,
            status: verdict.status,
            is_good: verdict.is_good,
            landmarks,
        }
    }

    /// Handle a request, reporting failures in the response
    pub fn respond(&mut self, bytes: &[u8]) -> PostureResponse {
        match self.process_image(bytes) {
            Ok(report) => PostureResponse::Success(report),
            Err(e) => PostureResponse::from_error(&e),
        }
    }

    /// Handle a request with the legacy policy, reporting failures in the
    /// response
    pub fn respond_legacy(&mut self, bytes: &[u8]) -> PostureResponse {
        match self.process_image_legacy(bytes) {
            Ok(report) => PostureResponse::Legacy(report),
            Err(e) => PostureResponse::from_error(&e),
        }
    }
}
