mod error;
mod imageops_morph;
mod utils;

use image::{ImageBuffer, Pixel};

pub use error::MorphologyError;
pub use imageops_morph::dispatch::{apply_operation, Operation, OperationParams};
pub use imageops_morph::neighborhood::Patch3;
pub use imageops_morph::point_ops::{PointArithmeticExt, ThresholdExt};
pub use imageops_morph::skeleton::{
    SkeletonOutcome, SkeletonizeExt, Termination, LANTUEJOUL_DEFAULT_STEP_CAP,
};
pub use imageops_morph::structuring::MorphologyExt;
pub use imageops_morph::thickening::ThickeningExt;
pub use imageops_morph::thinning::ThinningExt;

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
