//! Skeleton overlay rendering for detected landmarks.

use crate::{
    constants::{MARKER_RADIUS, OVERLAY_COLOR, VISIBILITY_THRESHOLD},
    landmarks::{Landmark, LandmarkSet, PoseLandmark},
    utils::safe_cast::normalized_to_pixel,
};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

/// Upper body connections drawn between landmarks
pub const SKELETON_CONNECTIONS: [(PoseLandmark, PoseLandmark); 7] = [
    (PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder),
    (PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow),
    (PoseLandmark::LeftElbow, PoseLandmark::LeftWrist),
    (PoseLandmark::RightShoulder, PoseLandmark::RightElbow),
    (PoseLandmark::RightElbow, PoseLandmark::RightWrist),
    (PoseLandmark::RightEar, PoseLandmark::RightShoulder),
    (PoseLandmark::LeftEar, PoseLandmark::LeftShoulder),
];

fn is_visible(landmark: &Landmark) -> bool {
    landmark.visibility > VISIBILITY_THRESHOLD
}

fn to_pixel(landmark: &Landmark, width: u32, height: u32) -> (i32, i32) {
    (
        normalized_to_pixel(landmark.x, width),
        normalized_to_pixel(landmark.y, height),
    )
}

/// Draw visible landmarks and their connections onto a copy of `image`
#[must_use]
#[allow(clippy::cast_precision_loss)] // Pixel coordinates are small
pub fn annotate(image: &RgbImage, landmarks: &LandmarkSet) -> RgbImage {
    let mut canvas = image.clone();
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return canvas;
    }
    let color = Rgb(OVERLAY_COLOR);

    for (_, landmark) in landmarks.iter().filter(|(_, landmark)| is_visible(landmark)) {
        draw_filled_circle_mut(&mut canvas, to_pixel(landmark, width, height), MARKER_RADIUS, color);
    }

    for (start, end) in SKELETON_CONNECTIONS {
        let (start, end) = (landmarks.get(start), landmarks.get(end));
        if !(is_visible(start) && is_visible(end)) {
            continue;
        }

        let (x0, y0) = to_pixel(start, width, height);
        let (x1, y1) = to_pixel(end, width, height);
        draw_line_segment_mut(
            &mut canvas,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
    }

    canvas
}
