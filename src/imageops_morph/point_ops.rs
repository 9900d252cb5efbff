use image::imageops::{self, FilterType};
use image::Luma;
use imageproc::map::{map_colors, map_colors2};
use log::warn;

use crate::Image;

/// Trait providing threshold operations for grayscale images
///
/// Thresholding classifies every pixel against a cutoff level independently
/// of its neighbors. Two output domains are offered: [`ThresholdExt::threshold`]
/// produces the display domain {0, 255}, while [`ThresholdExt::binarize`]
/// produces the {0, 1} domain consumed by the neighbor-rule engines
/// (thinning, thickening and homotopic skeletonization).
pub trait ThresholdExt {
    /// Classifies every pixel into {0, 255} against `level`
    ///
    /// Pixels strictly below `level` become 0, pixels at or above it
    /// become 255. Returns a new image; the input is untouched.
    ///
    /// # Arguments
    ///
    /// * `level` - The cutoff intensity
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use image::{ImageBuffer, Luma};
    /// use imageops_morph::{Image, ThresholdExt};
    ///
    /// let image: Image<Luma<u8>> = ImageBuffer::new(10, 10);
    /// let binary = image.threshold(127);
    /// ```
    fn threshold(&self, level: u8) -> Self;

    /// In-place variant of [`ThresholdExt::threshold`]
    ///
    /// Mutates the receiver instead of allocating a new image. Prefer the
    /// pure variant unless the caller owns the buffer and needs zero-copy
    /// behavior.
    fn threshold_mut(&mut self, level: u8);

    /// Classifies every pixel into {0, 1} against `level`
    ///
    /// This is the input domain expected by the thinning, thickening and
    /// skeletonization passes.
    fn binarize(&self, level: u8) -> Self;
}

impl ThresholdExt for Image<Luma<u8>> {
    fn threshold(&self, level: u8) -> Self {
        map_colors(self, |p| Luma([if p[0] < level { 0 } else { 255 }]))
    }

    fn threshold_mut(&mut self, level: u8) {
        for pixel in self.pixels_mut() {
            pixel[0] = if pixel[0] < level { 0 } else { 255 };
        }
    }

    fn binarize(&self, level: u8) -> Self {
        map_colors(self, |p| Luma([u8::from(p[0] >= level)]))
    }
}

/// Trait providing saturating pixel-wise arithmetic between two images
///
/// Both operations clamp their per-pixel result to [0, 255]. The secondary
/// operand does not have to match the receiver's dimensions: a mismatched
/// operand is resampled (bilinear) to the receiver's shape before combining,
/// so shape mismatch is reconciled locally and never surfaced as an error.
/// Mixed value domains (grayscale against binary) are permitted and simply
/// produce clipped results.
pub trait PointArithmeticExt {
    /// Per-pixel sum of `self` and `other`, saturating at 255
    ///
    /// # Arguments
    ///
    /// * `other` - The secondary operand; resized to `self`'s dimensions
    ///   when the shapes differ
    fn saturating_add(&self, other: &Self) -> Self;

    /// Per-pixel difference of `self` and `other`, saturating at 0
    ///
    /// # Arguments
    ///
    /// * `other` - The secondary operand; resized to `self`'s dimensions
    ///   when the shapes differ
    fn saturating_sub(&self, other: &Self) -> Self;
}

impl PointArithmeticExt for Image<Luma<u8>> {
    fn saturating_add(&self, other: &Self) -> Self {
        let other = conform_shape(self, other);
        map_colors2(self, &other, |a, b| Luma([a[0].saturating_add(b[0])]))
    }

    fn saturating_sub(&self, other: &Self) -> Self {
        let other = conform_shape(self, other);
        map_colors2(self, &other, |a, b| Luma([a[0].saturating_sub(b[0])]))
    }
}

/// Resamples `other` to `reference`'s dimensions when the shapes differ.
fn conform_shape(reference: &Image<Luma<u8>>, other: &Image<Luma<u8>>) -> Image<Luma<u8>> {
    if reference.dimensions() == other.dimensions() {
        return other.clone();
    }

    let (width, height) = reference.dimensions();
    warn!(
        "resizing secondary operand from {:?} to {:?}",
        other.dimensions(),
        (width, height)
    );
    imageops::resize(other, width, height, FilterType::Triangle)
}
