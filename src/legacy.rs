//! Superseded single-sided neck angle policy.
//!
//! Measures the direction of the right shoulder-to-ear vector in image
//! coordinates and accepts the posture when the negated angle lies within a
//! fixed range. It is kept as its own policy and is not interchangeable with
//! [`crate::angle::compute_angles`].

use crate::{
    constants::{LEGACY_GOOD_MAX_DEGREES, LEGACY_GOOD_MIN_DEGREES},
    landmarks::{LandmarkSet, PoseLandmark},
};
use serde::{Deserialize, Serialize};

/// Status text for an accepted posture
pub const LEGACY_GOOD_STATUS: &str = "Good Posture";

/// Status text for a rejected posture
pub const LEGACY_BAD_STATUS: &str = "Bad Posture! Please sit straight";

/// Outcome of the legacy posture check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyVerdict {
    /// Human readable status
    pub status: String,
    /// Whether the posture is acceptable
    pub is_good: bool,
}

/// Direction in degrees of the right shoulder-to-ear vector.
///
/// No visibility gating is applied.
#[must_use]
pub fn legacy_neck_angle(landmarks: &LandmarkSet) -> f64 {
    let shoulder = landmarks.get(PoseLandmark::RightShoulder);
    let ear = landmarks.get(PoseLandmark::RightEar);

    let dy = f64::from(ear.y) - f64::from(shoulder.y);
    let dx = f64::from(ear.x) - f64::from(shoulder.x);
    dy.atan2(dx).to_degrees()
}

/// Classify a legacy angle. The angle is negated before the range check.
#[must_use]
pub fn legacy_check_posture(angle: f64) -> LegacyVerdict {
    let negated = -angle;
    let is_good = (LEGACY_GOOD_MIN_DEGREES..=LEGACY_GOOD_MAX_DEGREES).contains(&negated);

    LegacyVerdict {
        status: (if is_good { LEGACY_GOOD_STATUS } else { LEGACY_BAD_STATUS }).to_string(),
        is_good,
    }
}
