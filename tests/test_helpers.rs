//! Helper functions and utilities for tests

#![allow(dead_code)]

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use neck_posture::{
    angle::Side,
    landmarks::{Landmark, LandmarkSet},
};
use std::io::Cursor;

/// Landmark at `(x, y)` with the given visibility
pub fn point(x: f32, y: f32, visibility: f32) -> Landmark {
    Landmark::new(x, y, 0.0, visibility)
}

/// Landmark set where only one side's shoulder and ear are filled in
pub fn one_side(side: Side, shoulder: Landmark, ear: Landmark) -> LandmarkSet {
    let mut set = LandmarkSet::default();
    set.set(side.shoulder(), shoulder);
    set.set(side.ear(), ear);
    set
}

/// Landmark set with both sides filled in
pub fn both_sides(left: (Landmark, Landmark), right: (Landmark, Landmark)) -> LandmarkSet {
    let mut set = one_side(Side::Left, left.0, left.1);
    set.set(Side::Right.shoulder(), right.0);
    set.set(Side::Right.ear(), right.1);
    set
}

/// Encode a blank image of the given size as PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
        .write_to(&mut bytes, ImageOutputFormat::Png)
        .expect("PNG encoding failed");
    bytes.into_inner()
}
