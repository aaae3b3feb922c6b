//! Body landmark types produced by the pose landmark provider.
//!
//! Coordinates are normalized to the image dimensions with the origin at the
//! top-left corner and `y` growing downward.

use crate::{constants::NUM_POSE_LANDMARKS, Error, Result};
use serde::{Deserialize, Serialize};

/// A single body keypoint with a visibility confidence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position
    pub x: f32,
    /// Normalized vertical position (downward)
    pub y: f32,
    /// Relative depth, unused by the angle calculation
    pub z: f32,
    /// Confidence in `[0, 1]` that the point is visible and unoccluded
    pub visibility: f32,
}

impl Landmark {
    /// Create a landmark from its components
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }
}

/// The 33-point BlazePose body topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl PoseLandmark {
    /// All landmarks in model output order
    pub const ALL: [Self; NUM_POSE_LANDMARKS] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Position of this landmark in a [`LandmarkSet`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper snake case name as used by MediaPipe
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "NOSE",
            Self::LeftEyeInner => "LEFT_EYE_INNER",
            Self::LeftEye => "LEFT_EYE",
            Self::LeftEyeOuter => "LEFT_EYE_OUTER",
            Self::RightEyeInner => "RIGHT_EYE_INNER",
            Self::RightEye => "RIGHT_EYE",
            Self::RightEyeOuter => "RIGHT_EYE_OUTER",
            Self::LeftEar => "LEFT_EAR",
            Self::RightEar => "RIGHT_EAR",
            Self::MouthLeft => "MOUTH_LEFT",
            Self::MouthRight => "MOUTH_RIGHT",
            Self::LeftShoulder => "LEFT_SHOULDER",
            Self::RightShoulder => "RIGHT_SHOULDER",
            Self::LeftElbow => "LEFT_ELBOW",
            Self::RightElbow => "RIGHT_ELBOW",
            Self::LeftWrist => "LEFT_WRIST",
            Self::RightWrist => "RIGHT_WRIST",
            Self::LeftPinky => "LEFT_PINKY",
            Self::RightPinky => "RIGHT_PINKY",
            Self::LeftIndex => "LEFT_INDEX",
            Self::RightIndex => "RIGHT_INDEX",
            Self::LeftThumb => "LEFT_THUMB",
            Self::RightThumb => "RIGHT_THUMB",
            Self::LeftHip => "LEFT_HIP",
            Self::RightHip => "RIGHT_HIP",
            Self::LeftKnee => "LEFT_KNEE",
            Self::RightKnee => "RIGHT_KNEE",
            Self::LeftAnkle => "LEFT_ANKLE",
            Self::RightAnkle => "RIGHT_ANKLE",
            Self::LeftHeel => "LEFT_HEEL",
            Self::RightHeel => "RIGHT_HEEL",
            Self::LeftFootIndex => "LEFT_FOOT_INDEX",
            Self::RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

/// Landmarks of one detected person, indexed by [`PoseLandmark`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: [Landmark; NUM_POSE_LANDMARKS],
}

impl LandmarkSet {
    /// Create a set from a full array of landmarks
    #[must_use]
    pub const fn new(points: [Landmark; NUM_POSE_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Create a set from a slice, which must hold exactly 33 landmarks
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the slice has the wrong length
    pub fn from_slice(points: &[Landmark]) -> Result<Self> {
        let points: [Landmark; NUM_POSE_LANDMARKS] = points.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Expected {} landmarks, got {}",
                NUM_POSE_LANDMARKS,
                points.len()
            ))
        })?;
        Ok(Self { points })
    }

    /// Get a landmark by name
    #[must_use]
    pub fn get(&self, landmark: PoseLandmark) -> &Landmark {
        &self.points[landmark.index()]
    }

    /// Replace a landmark by name
    pub fn set(&mut self, landmark: PoseLandmark, value: Landmark) {
        self.points[landmark.index()] = value;
    }

    /// All landmarks in topology order
    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }

    /// Iterate over named landmarks
    pub fn iter(&self) -> impl Iterator<Item = (PoseLandmark, &Landmark)> {
        PoseLandmark::ALL.iter().copied().zip(self.points.iter())
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            points: [Landmark::default(); NUM_POSE_LANDMARKS],
        }
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = Error;

    fn try_from(points: Vec<Landmark>) -> Result<Self> {
        Self::from_slice(&points)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points.to_vec()
    }
}
