use image::Luma;
use itertools::iproduct;

use crate::error::MorphologyError;
use crate::imageops_morph::neighborhood::Patch3;
use crate::utils::{ensure_non_empty, pad_with_zero_border, strip_zero_border};
use crate::Image;

/// Trait providing the dual of Zhang-Suen thinning for binary images
///
/// Thickening grows foreground regions by promoting background pixels whose
/// neighborhood satisfies the inverted thinning rules: the neighbor-count
/// bound applies to background neighbors and the ring transition direction
/// flips to 1 -> 0. Pixels are added simultaneously per pass and the pass
/// count is caller-bounded, mirroring the thinning engine.
pub trait ThickeningExt {
    /// The error type produced when the input is rejected
    type Error;

    /// Runs the given number of pixel-addition passes
    ///
    /// # Arguments
    ///
    /// * `iterations` - Number of full addition passes to run
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    fn thicken(&self, iterations: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

impl ThickeningExt for Image<Luma<u8>> {
    type Error = MorphologyError;

    fn thicken(&self, iterations: u32) -> Result<Self, MorphologyError> {
        let (width, height) = ensure_non_empty(self)?;

        let mut padded = pad_with_zero_border(self);
        for _ in 0..iterations {
            let marked: Vec<(u32, u32)> = iproduct!(1..=height, 1..=width)
                .filter(|&(y, x)| padded.get_pixel(x, y)[0] == 0)
                .filter(|&(y, x)| should_add(&Patch3::read(&padded, x, y)))
                .map(|(y, x)| (x, y))
                .collect();

            for (x, y) in marked {
                padded.put_pixel(x, y, Luma([1]));
            }
        }

        Ok(strip_zero_border(&padded))
    }
}

fn should_add(patch: &Patch3) -> bool {
    let neighbors = patch.background_neighbors();
    (2..=6).contains(&neighbors)
        && patch.falling_transitions() == 1
        && (patch.east_south_products_zero() || patch.north_west_products_zero())
}
