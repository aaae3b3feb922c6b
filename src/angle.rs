//! Two-sided head-forward angle calculation.
//!
//! For each side the angle between the shoulder-to-ear vector and the
//! vertical is measured. 0° means the ear sits directly above the shoulder;
//! the sign of the horizontal displacement is discarded, so only the
//! magnitude of forward or backward lean is reported.

use crate::{
    constants::{MIN_VERTICAL_DISPLACEMENT, VISIBILITY_THRESHOLD},
    landmarks::{Landmark, LandmarkSet, PoseLandmark},
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Body side of an ear/shoulder pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Subject's left side
    Left,
    /// Subject's right side
    Right,
}

impl Side {
    /// Both sides, left first
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Shoulder landmark of this side
    #[must_use]
    pub const fn shoulder(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftShoulder,
            Self::Right => PoseLandmark::RightShoulder,
        }
    }

    /// Ear landmark of this side
    #[must_use]
    pub const fn ear(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftEar,
            Self::Right => PoseLandmark::RightEar,
        }
    }
}

/// Head-forward angles in degrees for the sides that could be measured.
///
/// A value produced by [`compute_angles`] always has at least one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    /// Left side angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    /// Right side angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl AngleResult {
    /// Angle for one side, if measured
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<f64> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Whether no side was measured
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Measured sides with their angles, left first
    pub fn sides(&self) -> impl Iterator<Item = (Side, f64)> + '_ {
        Side::BOTH
            .into_iter()
            .filter_map(|side| self.get(side).map(|angle| (side, angle)))
    }
}

/// Angle in degrees between the shoulder-to-ear vector and the vertical
#[must_use]
pub fn side_angle(shoulder: &Landmark, ear: &Landmark) -> f64 {
    let dx = f64::from(ear.x) - f64::from(shoulder.x);
    let dy = f64::from(shoulder.y) - f64::from(ear.y);

    dx.abs().atan2(dy.max(MIN_VERTICAL_DISPLACEMENT)).to_degrees()
}

/// Whether both landmarks of a pair are confidently visible.
///
/// A NaN visibility never passes.
#[must_use]
pub fn is_pair_visible(shoulder: &Landmark, ear: &Landmark) -> bool {
    ear.visibility > VISIBILITY_THRESHOLD && shoulder.visibility > VISIBILITY_THRESHOLD
}

/// Compute the head-forward angle of every side whose ear and shoulder are
/// visible.
///
/// # Errors
///
/// Returns `NoReliableSide` if neither side clears the visibility threshold
pub fn compute_angles(landmarks: &LandmarkSet) -> Result<AngleResult> {
    let mut result = AngleResult::default();

    for side in Side::BOTH {
        let shoulder = landmarks.get(side.shoulder());
        let ear = landmarks.get(side.ear());

        if !is_pair_visible(shoulder, ear) {
            log::debug!(
                "Skipping {:?} side: {}={:.2} {}={:.2}",
                side,
                side.ear().name(),
                ear.visibility,
                side.shoulder().name(),
                shoulder.visibility
            );
            continue;
        }

        let angle = side_angle(shoulder, ear);
        match side {
            Side::Left => result.left = Some(angle),
            Side::Right => result.right = Some(angle),
        }
    }

    if result.is_empty() {
        return Err(Error::NoReliableSide);
    }

    Ok(result)
}
