//! Landmark provider abstraction.
//!
//! The pose model is treated as a black box behind [`LandmarkProvider`], so
//! the request pipeline can run against synthetic landmarks in tests.

use crate::{landmarks::LandmarkSet, Result};
use image::RgbImage;

/// Source of body landmarks for a decoded image
pub trait LandmarkProvider {
    /// Detect the landmarks of the single person in `image`.
    ///
    /// Returns `Ok(None)` when no person is found.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying model fails
    fn detect(&mut self, image: &RgbImage) -> Result<Option<LandmarkSet>>;
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for Box<P> {
    fn detect(&mut self, image: &RgbImage) -> Result<Option<LandmarkSet>> {
        (**self).detect(image)
    }
}

/// Provider returning a fixed result for every image
#[derive(Debug, Clone, Default)]
pub struct FixedProvider {
    landmarks: Option<LandmarkSet>,
}

impl FixedProvider {
    /// Always report `landmarks`
    #[must_use]
    pub const fn new(landmarks: LandmarkSet) -> Self {
        Self {
            landmarks: Some(landmarks),
        }
    }

    /// Never find a person
    #[must_use]
    pub const fn empty() -> Self {
        Self { landmarks: None }
    }
}

impl LandmarkProvider for FixedProvider {
    fn detect(&mut self, _image: &RgbImage) -> Result<Option<LandmarkSet>> {
        Ok(self.landmarks.clone())
    }
}
