//! Behavioural properties of the two-sided head-forward angle

mod test_helpers;

use neck_posture::{
    angle::{compute_angles, side_angle, Side},
    error::Error,
    landmarks::LandmarkSet,
};
use proptest::prelude::*;
use test_helpers::{both_sides, one_side, point};

#[test]
fn test_upright_right_side_is_zero() {
    let set = one_side(Side::Right, point(0.5, 0.6, 1.0), point(0.5, 0.4, 1.0));
    let angles = compute_angles(&set).unwrap();

    assert_eq!(angles.right, Some(0.0));
    assert!(angles.left.is_none());
}

#[test]
fn test_forward_head_scenario() {
    let set = one_side(Side::Right, point(0.5, 0.6, 1.0), point(0.6, 0.55, 1.0));
    let angle = compute_angles(&set).unwrap().right.unwrap();

    // atan2(0.1, 0.05)
    assert!((angle - 63.4349).abs() < 1e-2, "got {angle}");
}

#[test]
fn test_occluded_ear_fails() {
    let set = one_side(Side::Right, point(0.5, 0.6, 0.9), point(0.5, 0.4, 0.3));
    assert!(matches!(compute_angles(&set), Err(Error::NoReliableSide)));
}

#[test]
fn test_only_left_side_visible() {
    let set = both_sides(
        (point(0.4, 0.6, 0.95), point(0.42, 0.4, 0.9)),
        (point(0.6, 0.6, 0.2), point(0.62, 0.4, 0.9)),
    );
    let angles = compute_angles(&set).unwrap();

    assert!(angles.left.is_some());
    assert!(angles.right.is_none());
}

#[test]
fn test_both_sides_measured_independently() {
    let set = both_sides(
        (point(0.4, 0.6, 1.0), point(0.4, 0.4, 1.0)),
        (point(0.6, 0.6, 1.0), point(0.7, 0.5, 1.0)),
    );
    let angles = compute_angles(&set).unwrap();

    assert!(angles.left.unwrap().abs() < 1e-9);
    assert!((angles.right.unwrap() - 45.0).abs() < 1e-3);
}

#[test]
fn test_empty_landmarks_fail() {
    assert!(matches!(compute_angles(&LandmarkSet::default()), Err(Error::NoReliableSide)));
}

proptest! {
    #[test]
    fn prop_ear_directly_above_is_zero(
        x in 0.0f32..1.0,
        shoulder_y in 0.5f32..1.0,
        rise in 0.01f32..0.5,
        visibility in 0.51f32..=1.0,
    ) {
        let set = one_side(Side::Right, point(x, shoulder_y, visibility), point(x, shoulder_y - rise, visibility));
        let angle = compute_angles(&set).unwrap().right.unwrap();
        prop_assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn prop_lean_direction_is_ignored(
        dx in 0.0f32..0.4,
        dy in -0.3f32..0.3,
    ) {
        // Shoulder on the origin column so both ears sit exactly `dx` away
        let shoulder = point(0.0, 0.6, 1.0);
        let forward = side_angle(&shoulder, &point(dx, 0.6 - dy, 1.0));
        let backward = side_angle(&shoulder, &point(-dx, 0.6 - dy, 1.0));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_angle_bounded_when_ear_not_above(
        dx in 0.0f32..1.0,
        drop in 0.0f32..0.5,
    ) {
        // Ear level with or below the shoulder
        let angle = side_angle(&point(0.5, 0.5, 1.0), &point(0.5 + dx, 0.5 + drop, 1.0));
        prop_assert!(angle.is_finite());
        prop_assert!((0.0..=90.0).contains(&angle));
    }

    #[test]
    fn prop_low_visibility_never_measured(
        ear_visibility in 0.0f32..=0.5,
        shoulder_visibility in 0.0f32..=1.0,
    ) {
        let set = both_sides(
            (point(0.4, 0.6, shoulder_visibility), point(0.4, 0.4, ear_visibility)),
            (point(0.6, 0.6, shoulder_visibility), point(0.6, 0.4, ear_visibility)),
        );
        prop_assert!(matches!(compute_angles(&set), Err(Error::NoReliableSide)));
    }
}
