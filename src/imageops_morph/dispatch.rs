//! Operation dispatch for the image-serving layer.
//!
//! The serving layer hands over a decoded grayscale image, an operation
//! selector and the numeric form parameters; this module routes the request
//! through a single exhaustive `match`. Binary engines receive the image
//! binarized at `threshold_value`, the same preparation the request handler
//! applies before invoking them.

use image::Luma;

use crate::error::MorphologyError;
use crate::imageops_morph::point_ops::{PointArithmeticExt, ThresholdExt};
use crate::imageops_morph::skeleton::SkeletonizeExt;
use crate::imageops_morph::structuring::MorphologyExt;
use crate::imageops_morph::thickening::ThickeningExt;
use crate::imageops_morph::thinning::ThinningExt;
use crate::Image;

/// The closed set of operations the serving layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Threshold,
    Addition,
    Subtraction,
    Erosion,
    Dilation,
    Opening,
    Closing,
    Thinning,
    Thickening,
    LantuejoulSkeletonization,
    HomotopicSkeletonization,
    /// Returns the input unchanged; the target of the unknown-name fallback
    Identity,
}

impl Operation {
    /// Resolves an operation from its request-form name.
    ///
    /// Unknown names deliberately resolve to [`Operation::Identity`] instead
    /// of an error: the serving layer treats any unrecognized selection as
    /// "leave the image alone". This is a permissive contract, so it is
    /// spelled out here rather than left implicit.
    pub fn from_name(name: &str) -> Self {
        match name {
            "threshold" => Self::Threshold,
            "addition" => Self::Addition,
            "subtraction" => Self::Subtraction,
            "erosion" => Self::Erosion,
            "dilation" => Self::Dilation,
            "opening" => Self::Opening,
            "closing" => Self::Closing,
            "thinning" => Self::Thinning,
            "thickening" => Self::Thickening,
            "lantuejoul_skeletonization" => Self::LantuejoulSkeletonization,
            "homotopic_skeletonization" => Self::HomotopicSkeletonization,
            _ => Self::Identity,
        }
    }

    /// The request-form name of this operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Erosion => "erosion",
            Self::Dilation => "dilation",
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Thinning => "thinning",
            Self::Thickening => "thickening",
            Self::LantuejoulSkeletonization => "lantuejoul_skeletonization",
            Self::HomotopicSkeletonization => "homotopic_skeletonization",
            Self::Identity => "identity",
        }
    }
}

/// Numeric parameters accepted alongside an operation request.
///
/// The defaults match the request handler's form defaults. `kernel_size`
/// doubles as the erosion radius for the erosion-derived operations, the
/// shared-parameter convention the operations themselves document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationParams {
    /// Cutoff for thresholding and for binarizing the binary-engine input
    pub threshold_value: u8,
    /// Structuring-element size for erosion/dilation/opening/closing
    pub kernel_size: u32,
    /// Pass count for thinning and thickening
    pub iterations: u32,
}

impl Default for OperationParams {
    fn default() -> Self {
        Self {
            threshold_value: 127,
            kernel_size: 3,
            iterations: 10,
        }
    }
}

/// Applies `operation` to `image` and returns a same-sized result.
///
/// The secondary operand for addition and subtraction is injected
/// explicitly by the caller; there is no process-wide implicit default
/// inside this crate.
///
/// # Arguments
///
/// * `image` - The decoded grayscale input
/// * `operation` - The operation selector
/// * `operand` - Secondary image for addition/subtraction; ignored by every
///   other operation
/// * `params` - Numeric form parameters
///
/// # Errors
///
/// * [`MorphologyError::MissingOperand`] - Addition or subtraction without
///   an operand
/// * [`MorphologyError::EmptyImage`] - Zero-dimension input to a windowed
///   operation
/// * [`MorphologyError::InvalidKernelSize`] - Zero `kernel_size` handed to
///   a dilation-derived operation
pub fn apply_operation(
    image: &Image<Luma<u8>>,
    operation: Operation,
    operand: Option<&Image<Luma<u8>>>,
    params: &OperationParams,
) -> Result<Image<Luma<u8>>, MorphologyError> {
    match operation {
        Operation::Threshold => Ok(image.threshold(params.threshold_value)),
        Operation::Addition => {
            let operand = operand.ok_or(MorphologyError::MissingOperand {
                operation: Operation::Addition.name(),
            })?;
            Ok(image.saturating_add(operand))
        }
        Operation::Subtraction => {
            let operand = operand.ok_or(MorphologyError::MissingOperand {
                operation: Operation::Subtraction.name(),
            })?;
            Ok(image.saturating_sub(operand))
        }
        Operation::Erosion => image.erode(params.kernel_size),
        Operation::Dilation => image.dilate(params.kernel_size),
        Operation::Opening => image.open(params.kernel_size),
        Operation::Closing => image.close(params.kernel_size),
        Operation::Thinning => image.binarize(params.threshold_value).thin(params.iterations),
        Operation::Thickening => image
            .binarize(params.threshold_value)
            .thicken(params.iterations),
        Operation::LantuejoulSkeletonization => image
            .binarize(params.threshold_value)
            .skeletonize_lantuejoul()
            .map(|outcome| outcome.image),
        Operation::HomotopicSkeletonization => image
            .binarize(params.threshold_value)
            .skeletonize_homotopic()
            .map(|outcome| outcome.image),
        Operation::Identity => Ok(image.clone()),
    }
}
