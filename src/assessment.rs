//! Good/bad posture judgment over measured head-forward angles.
//!
//! The angle calculator reports magnitudes only; this layer applies the
//! user-tunable thresholds and produces the status shown to the user.

use crate::{
    angle::{AngleResult, Side},
    constants::{DEFAULT_MAX_GOOD_ANGLE, DEFAULT_PERFECT_ANGLE},
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Posture rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureRating {
    /// Within the perfect band
    Perfect,
    /// Acceptable forward angle
    Good,
    /// At least one side above the maximum good angle
    Bad,
}

impl PostureRating {
    /// Whether the posture is acceptable
    #[must_use]
    pub const fn is_good(self) -> bool {
        !matches!(self, Self::Bad)
    }
}

/// Result of assessing one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureAssessment {
    /// Rating of the posture
    pub rating: PostureRating,
    /// Whether the posture is acceptable
    pub is_good: bool,
    /// Mean of both sides, or the single measured side
    pub angle: f64,
    /// Sides the angle was measured on
    pub sides: Vec<Side>,
    /// Human readable status
    pub status: String,
}

/// Thresholds for judging head-forward angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureAssessor {
    max_good_angle: f64,
    perfect_angle: f64,
}

impl Default for PostureAssessor {
    fn default() -> Self {
        Self {
            max_good_angle: DEFAULT_MAX_GOOD_ANGLE,
            perfect_angle: DEFAULT_PERFECT_ANGLE,
        }
    }
}

impl PostureAssessor {
    /// Create an assessor
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a threshold is outside `[0, 90]`.
    ///
    /// A perfect band wider than the maximum good angle is allowed; bad
    /// angles are never rated perfect.
    pub fn new(max_good_angle: f64, perfect_angle: f64) -> Result<Self> {
        for (name, value) in [("Max good angle", max_good_angle), ("Perfect angle", perfect_angle)] {
            if !(0.0..=90.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{name} must be between 0 and 90 degrees, got {value}"
                )));
            }
        }
        Ok(Self {
            max_good_angle,
            perfect_angle,
        })
    }

    /// Maximum angle still considered good
    #[must_use]
    pub const fn max_good_angle(&self) -> f64 {
        self.max_good_angle
    }

    /// Upper bound of the perfect band
    #[must_use]
    pub const fn perfect_angle(&self) -> f64 {
        self.perfect_angle
    }

    /// Judge a measurement
    ///
    /// # Errors
    ///
    /// Returns `NoReliableSide` if the measurement has no side
    pub fn assess(&self, angles: &AngleResult) -> Result<PostureAssessment> {
        let measured: Vec<(Side, f64)> = angles.sides().collect();
        if measured.is_empty() {
            return Err(Error::NoReliableSide);
        }

        let is_good = measured.iter().all(|&(_, angle)| angle <= self.max_good_angle);
        #[allow(clippy::cast_precision_loss)] // At most two sides
        let angle = measured.iter().map(|&(_, angle)| angle).sum::<f64>() / measured.len() as f64;
        let both_sides = measured.len() == 2;

        let rating = if !is_good {
            PostureRating::Bad
        } else if angle <= self.perfect_angle {
            PostureRating::Perfect
        } else {
            PostureRating::Good
        };

        let status = match rating {
            PostureRating::Perfect => "Excellent Posture!".to_string(),
            PostureRating::Good => format!("Good Posture - {angle:.1}° forward"),
            PostureRating::Bad if both_sides => {
                format!("Bad Posture - {angle:.1}° forward. Pull your head back!")
            }
            PostureRating::Bad => format!("Bad Posture - {angle:.1}° forward. Straighten your neck!"),
        };

        Ok(PostureAssessment {
            rating,
            is_good: rating.is_good(),
            angle,
            sides: measured.into_iter().map(|(side, _)| side).collect(),
            status,
        })
    }
}
