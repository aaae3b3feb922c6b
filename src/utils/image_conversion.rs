//! Image decoding and model input preparation.

use crate::{constants::IMAGE_NORMALIZATION_SCALE, Error, Result};
use image::{imageops::FilterType, Rgb, RgbImage};
use ndarray::Array4;

/// Decode an encoded bitmap (PNG, JPEG, BMP, WebP) into an RGB pixel grid
///
/// # Errors
///
/// Returns `InvalidInput` for empty input and `Image` if the format is not
/// recognised or the data is corrupt
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(Error::InvalidInput("Empty image data".to_string()));
    }

    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgb8())
}

/// Placement of an image inside a square, aspect-preserving model input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    /// Side of the square model input in pixels
    pub input_size: u32,
    /// Width of the source image
    pub source_width: u32,
    /// Height of the source image
    pub source_height: u32,
    /// Source-to-input scale factor
    pub scale: f32,
    /// Width of the resized image inside the input
    pub resized_width: u32,
    /// Height of the resized image inside the input
    pub resized_height: u32,
    /// Horizontal padding on the left in input pixels
    pub pad_x: u32,
    /// Vertical padding on the top in input pixels
    pub pad_y: u32,
}

impl Letterbox {
    /// Compute the letterbox for a source image
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any dimension is zero
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn new(source_width: u32, source_height: u32, input_size: u32) -> Result<Self> {
        if source_width == 0 || source_height == 0 || input_size == 0 {
            return Err(Error::InvalidInput(format!(
                "Invalid letterbox dimensions: {source_width}x{source_height} into {input_size}"
            )));
        }

        let scale = input_size as f32 / source_width.max(source_height) as f32;
        let resized_width = ((source_width as f32 * scale).round() as u32).clamp(1, input_size);
        let resized_height = ((source_height as f32 * scale).round() as u32).clamp(1, input_size);

        Ok(Self {
            input_size,
            source_width,
            source_height,
            scale,
            resized_width,
            resized_height,
            pad_x: (input_size - resized_width) / 2,
            pad_y: (input_size - resized_height) / 2,
        })
    }

    /// Size of the resized image inside the padded input
    #[must_use]
    pub const fn resized_dimensions(&self) -> (u32, u32) {
        (self.resized_width, self.resized_height)
    }

    /// Map a point in input pixels back to normalized source coordinates
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_normalized(&self, x: f32, y: f32) -> (f32, f32) {
        let source_x = (x - self.pad_x as f32) / self.scale;
        let source_y = (y - self.pad_y as f32) / self.scale;
        (
            source_x / self.source_width as f32,
            source_y / self.source_height as f32,
        )
    }
}

/// Resize `image` into a zero-padded square and return the padded image with
/// its letterbox
///
/// # Errors
///
/// Returns `InvalidInput` if the image or input size is empty
pub fn letterbox(image: &RgbImage, input_size: u32) -> Result<(RgbImage, Letterbox)> {
    let placement = Letterbox::new(image.width(), image.height(), input_size)?;
    let (width, height) = placement.resized_dimensions();

    let resized = image::imageops::resize(image, width, height, FilterType::Triangle);
    let mut padded = RgbImage::from_pixel(input_size, input_size, Rgb([0, 0, 0]));
    image::imageops::replace(
        &mut padded,
        &resized,
        i64::from(placement.pad_x),
        i64::from(placement.pad_y),
    );

    Ok((padded, placement))
}

/// Convert an RGB image into a `[1, H, W, 3]` tensor normalized to `[0, 1]`
#[must_use]
pub fn rgb_to_nhwc_tensor(image: &RgbImage) -> Array4<f32> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    Array4::from_shape_fn((1, height, width, 3), |(_, row, col, ch)| {
        #[allow(clippy::cast_possible_truncation)]
        let pixel = image.get_pixel(col as u32, row as u32);
        f32::from(pixel[ch]) / IMAGE_NORMALIZATION_SCALE
    })
}
