//! Internal helpers shared by the morphology passes.

use image::Luma;
use itertools::iproduct;

use crate::error::MorphologyError;
use crate::Image;

/// Rejects zero-dimension images and returns `(width, height)` otherwise.
pub(crate) fn ensure_non_empty(image: &Image<Luma<u8>>) -> Result<(u32, u32), MorphologyError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(MorphologyError::EmptyImage { width, height });
    }
    Ok((width, height))
}

/// Copies `image` into a grid that is one pixel larger on every side.
///
/// The added border is zero-valued, so the neighbor-rule passes can read a
/// full 3x3 patch at every original pixel without bounds checks.
pub(crate) fn pad_with_zero_border(image: &Image<Luma<u8>>) -> Image<Luma<u8>> {
    let (width, height) = image.dimensions();
    let mut padded: Image<Luma<u8>> = Image::new(width + 2, height + 2);
    for (x, y, pixel) in image.enumerate_pixels() {
        padded.put_pixel(x + 1, y + 1, *pixel);
    }
    padded
}

/// Inverse of [`pad_with_zero_border`]: drops the outermost one-pixel ring.
pub(crate) fn strip_zero_border(padded: &Image<Luma<u8>>) -> Image<Luma<u8>> {
    let (padded_width, padded_height) = padded.dimensions();
    let mut image: Image<Luma<u8>> = Image::new(padded_width - 2, padded_height - 2);
    for (y, x) in iproduct!(0..padded_height - 2, 0..padded_width - 2) {
        image.put_pixel(x, y, *padded.get_pixel(x + 1, y + 1));
    }
    image
}
