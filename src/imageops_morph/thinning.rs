use image::Luma;
use itertools::iproduct;

use crate::error::MorphologyError;
use crate::imageops_morph::neighborhood::Patch3;
use crate::utils::{ensure_non_empty, pad_with_zero_border, strip_zero_border};
use crate::Image;

/// Trait providing Zhang-Suen thinning for binary images
///
/// Thinning peels line-like foreground structures toward 1-pixel-wide
/// skeletons without disconnecting them. Input pixels must be in {0, 1};
/// binarize grayscale data first (see `ThresholdExt::binarize`).
pub trait ThinningExt {
    /// The error type produced when the input is rejected
    type Error;

    /// Runs the given number of Zhang-Suen deletion passes
    ///
    /// Each pass scans every foreground pixel over a zero-padded copy and
    /// marks it for deletion iff all of the following hold on its 3x3
    /// patch:
    ///
    /// 1. it has between 2 and 6 foreground neighbors,
    /// 2. walking the neighbors clockwise from the top-left corner yields
    ///    exactly one 0 -> 1 transition,
    /// 3. one of the two Zhang-Suen connectivity conditions holds
    ///    (see [`Patch3::east_south_products_zero`] and
    ///    [`Patch3::north_west_products_zero`]).
    ///
    /// Marked pixels are deleted together after the scan, so deletions
    /// within a pass never affect each other's evaluation. The pass count
    /// is caller-bounded; the engine does not detect convergence itself.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Number of full deletion passes to run
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    fn thin(&self, iterations: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

impl ThinningExt for Image<Luma<u8>> {
    type Error = MorphologyError;

    fn thin(&self, iterations: u32) -> Result<Self, MorphologyError> {
        let (width, height) = ensure_non_empty(self)?;

        let mut padded = pad_with_zero_border(self);
        for _ in 0..iterations {
            let marked: Vec<(u32, u32)> = iproduct!(1..=height, 1..=width)
                .filter(|&(y, x)| padded.get_pixel(x, y)[0] == 1)
                .filter(|&(y, x)| should_delete(&Patch3::read(&padded, x, y)))
                .map(|(y, x)| (x, y))
                .collect();

            for (x, y) in marked {
                padded.put_pixel(x, y, Luma([0]));
            }
        }

        Ok(strip_zero_border(&padded))
    }
}

fn should_delete(patch: &Patch3) -> bool {
    let neighbors = patch.foreground_neighbors();
    (2..=6).contains(&neighbors)
        && patch.rising_transitions() == 1
        && (patch.east_south_products_zero() || patch.north_west_products_zero())
}
