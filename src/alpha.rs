//! Channel widening and masked transparency.
//!
//! Background pixels are cleared to `(0, 0, 0, 0)`: the colour channels are
//! zeroed along with alpha, so the original background colour is discarded.

use image::buffer::ConvertBuffer;
use image::{Rgba, RgbImage, RgbaImage};

use crate::error::{Error, Result};
use crate::mask::BackgroundIndicator;

/// Fully transparent black.
pub const CLEARED: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Append a fully opaque alpha channel to every pixel.
#[must_use]
pub fn widen_to_rgba(image: &RgbImage) -> RgbaImage {
    image.convert()
}

/// Clear every pixel flagged as background.
///
/// Returns the number of pixels cleared.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `background` does not have the
/// image's dimensions.
pub fn clear_background(image: &mut RgbaImage, background: &BackgroundIndicator) -> Result<usize> {
    if image.dimensions() != (background.width(), background.height()) {
        return Err(Error::DimensionMismatch {
            expected_width: image.width(),
            expected_height: image.height(),
            actual_width: background.width(),
            actual_height: background.height(),
        });
    }

    let mut cleared = 0;
    for (px, &is_bg) in image.pixels_mut().zip(background.as_slice()) {
        if is_bg {
            *px = CLEARED;
            cleared += 1;
        }
    }
    Ok(cleared)
}
