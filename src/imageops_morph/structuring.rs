use image::Luma;
use itertools::iproduct;

use crate::error::MorphologyError;
use crate::utils::ensure_non_empty;
use crate::Image;

/// Trait providing square-structuring-element morphology for grayscale images
///
/// Erosion and dilation deliberately use two different border policies:
///
/// * **Erosion** clips the window at the image bounds. Border pixels are
///   tested against a smaller window, which makes them strictly easier to
///   keep as foreground than interior pixels.
/// * **Dilation** recomputes only the pixels where the full window fits and
///   copies the remaining border ring through from the input unchanged.
///
/// The two policies are part of the contract and are not unified; opening
/// and closing are composed directly from them.
pub trait MorphologyExt {
    /// The error type produced when an operation rejects its input
    type Error;

    /// Erodes the image with a square window of side `2 * radius + 1`
    ///
    /// An output pixel is 255 iff every pixel of the window centered on it
    /// is nonzero; otherwise it is 0. The window is clipped at the image
    /// bounds. A radius of 0 degenerates to normalizing nonzero pixels
    /// to 255.
    ///
    /// # Arguments
    ///
    /// * `radius` - Half-side of the structuring element
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    fn erode(&self, radius: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Dilates the image with a square window of side `kernel_size`
    ///
    /// An output pixel is 255 iff any pixel of the window centered on it is
    /// nonzero, and 0 otherwise. Only pixels whose full window fits inside
    /// the image are recomputed; a border ring of width `kernel_size / 2`
    /// is copied through from the input.
    ///
    /// # Arguments
    ///
    /// * `kernel_size` - Side of the structuring element
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    /// * [`MorphologyError::InvalidKernelSize`] - `kernel_size` is 0
    fn dilate(&self, kernel_size: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Erosion followed by dilation; removes small foreground noise
    ///
    /// The same `kernel_size` parameterizes both halves, interpreted as a
    /// radius by the erosion and as a full window side by the dilation.
    /// Callers pick the value for the structuring-element size they intend.
    fn open(&self, kernel_size: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Dilation followed by erosion; fills small background holes
    ///
    /// Shares the parameter convention of [`MorphologyExt::open`].
    fn close(&self, kernel_size: u32) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

impl MorphologyExt for Image<Luma<u8>> {
    type Error = MorphologyError;

    fn erode(&self, radius: u32) -> Result<Self, MorphologyError> {
        let (width, height) = ensure_non_empty(self)?;

        let mut output: Self = Image::new(width, height);
        for (y, x) in iproduct!(0..height, 0..width) {
            let x0 = x.saturating_sub(radius);
            let y0 = y.saturating_sub(radius);
            let x1 = x.saturating_add(radius).min(width - 1);
            let y1 = y.saturating_add(radius).min(height - 1);

            let all_foreground =
                iproduct!(y0..=y1, x0..=x1).all(|(wy, wx)| self.get_pixel(wx, wy)[0] > 0);

            output.put_pixel(x, y, Luma([if all_foreground { 255 } else { 0 }]));
        }

        Ok(output)
    }

    fn dilate(&self, kernel_size: u32) -> Result<Self, MorphologyError> {
        let (width, height) = ensure_non_empty(self)?;
        if kernel_size == 0 {
            return Err(MorphologyError::InvalidKernelSize { kernel_size });
        }

        let padding = kernel_size / 2;
        let mut output = self.clone();
        if width <= 2 * padding || height <= 2 * padding {
            // No pixel has a full window; everything is border copy-through.
            return Ok(output);
        }

        for (y, x) in iproduct!(padding..height - padding, padding..width - padding) {
            let any_foreground = iproduct!(y - padding..=y + padding, x - padding..=x + padding)
                .any(|(wy, wx)| self.get_pixel(wx, wy)[0] != 0);

            output.put_pixel(x, y, Luma([if any_foreground { 255 } else { 0 }]));
        }

        Ok(output)
    }

    fn open(&self, kernel_size: u32) -> Result<Self, MorphologyError> {
        self.erode(kernel_size)?.dilate(kernel_size)
    }

    fn close(&self, kernel_size: u32) -> Result<Self, MorphologyError> {
        self.dilate(kernel_size)?.erode(kernel_size)
    }
}
