//! Utility functions for image preparation and numeric conversions.

pub mod image_conversion;
pub mod safe_cast;

/// Logistic function mapping a model logit to a probability
#[must_use]
pub fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-value).exp())
}
