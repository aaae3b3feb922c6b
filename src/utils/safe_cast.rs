//! Safe casting utilities for image dimensions and pixel coordinates

/// Clamp and convert f32 to i32 for pixel coordinates
#[must_use]
#[allow(clippy::cast_precision_loss)] // Acceptable for clamping bounds
#[allow(clippy::cast_possible_truncation)] // Clamping ensures safe truncation
pub fn f32_to_i32_clamp(value: f32, min: i32, max: i32) -> i32 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    if !value.is_finite() {
        return min;
    }

    let clamped = value.clamp(min as f32, max as f32);
    (clamped as i32).clamp(min, max)
}

/// Map a normalized coordinate onto a pixel index in `[0, extent - 1]`
#[must_use]
#[allow(clippy::cast_precision_loss)] // Image extents are far below f32 precision limits
#[allow(clippy::cast_possible_wrap)]
pub fn normalized_to_pixel(value: f32, extent: u32) -> i32 {
    let max = extent.saturating_sub(1).min(i32::MAX as u32) as i32;
    f32_to_i32_clamp((value * extent as f32).round(), 0, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_f32_to_i32_clamp() {
        assert_eq!(f32_to_i32_clamp(50.0, 0, 100), 50);
        assert_eq!(f32_to_i32_clamp(-10.0, 0, 100), 0);
        assert_eq!(f32_to_i32_clamp(150.0, 0, 100), 100);
        assert_eq!(f32_to_i32_clamp(f32::NAN, 0, 100), 0);
        assert_eq!(f32_to_i32_clamp(f32::INFINITY, 0, 100), 0);
    }

    #[test]
    fn test_normalized_to_pixel() {
        assert_eq!(normalized_to_pixel(0.0, 640), 0);
        assert_eq!(normalized_to_pixel(0.5, 640), 320);
        assert_eq!(normalized_to_pixel(1.0, 640), 639);
        // Landmarks may fall outside the frame
        assert_eq!(normalized_to_pixel(-0.2, 640), 0);
        assert_eq!(normalized_to_pixel(1.7, 640), 639);
        assert_eq!(normalized_to_pixel(0.5, 0), 0);
    }

    proptest! {
        #[test]
        fn prop_f32_to_i32_clamp_always_within_bounds(
            value in any::<f32>(),
            min in any::<i32>(),
            max in any::<i32>()
        ) {
            let (min, max) = if min <= max { (min, max) } else { (max, min) };
            let result = f32_to_i32_clamp(value, min, max);
            prop_assert!(result >= min);
            prop_assert!(result <= max);
        }

        #[test]
        fn prop_normalized_to_pixel_in_frame(value in any::<f32>(), extent in 1u32..10_000) {
            let pixel = normalized_to_pixel(value, extent);
            prop_assert!(pixel >= 0);
            prop_assert!((pixel as u32) < extent);
        }
    }
}
