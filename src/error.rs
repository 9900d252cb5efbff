use thiserror::Error;

/// Error type for morphology operations
///
/// This error type covers the failure modes shared by the point, structuring
/// and neighbor-rule operations. Shape mismatches between two operand images
/// are not represented here: pixel arithmetic reconciles them by resizing the
/// secondary operand instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphologyError {
    /// The input image has zero width or height
    ///
    /// Every operation scans pixel windows and none of them is defined on an
    /// empty grid, so this is rejected up front instead of producing
    /// out-of-bounds window arithmetic.
    #[error("Image is empty: dimensions are {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// The structuring element size is degenerate
    ///
    /// Dilation derives its window from `kernel_size`, which must be at
    /// least 1. Erosion accepts a radius of 0 (a 1x1 window) and is not
    /// affected by this error.
    #[error("Kernel size must be at least 1, got {kernel_size}")]
    InvalidKernelSize { kernel_size: u32 },

    /// A two-image operation was dispatched without its secondary image
    ///
    /// Addition and subtraction combine the uploaded image with a second
    /// operand that the serving layer must inject explicitly.
    #[error("Operation `{operation}` requires a secondary operand image")]
    MissingOperand { operation: &'static str },
}
