use image::Luma;
use log::{debug, warn};

use crate::error::MorphologyError;
use crate::imageops_morph::point_ops::PointArithmeticExt;
use crate::imageops_morph::structuring::MorphologyExt;
use crate::imageops_morph::thinning::ThinningExt;
use crate::utils::ensure_non_empty;
use crate::Image;

/// Default step cap for the erosion-based strategy.
///
/// A cap of 1 halts the accumulation after the first difference is folded
/// in, so in practice only the radius-0 erosion contributes. The default is
/// kept for compatibility with existing pipelines; raising it through
/// [`SkeletonizeExt::skeletonize_lantuejoul_with_cap`] enables the full
/// multi-step accumulation.
pub const LANTUEJOUL_DEFAULT_STEP_CAP: u32 = 1;

/// Reason a convergence-driven strategy stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Two consecutive results were pixel-identical
    Converged,
    /// The configured step or pass cap was reached before a fixed point
    ReachedCap,
}

/// Result of a skeletonization run.
///
/// Callers that only want the pixels can take `image`; `termination` tells
/// them whether that image is a true fixed point or a cap-limited
/// intermediate result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonOutcome {
    /// The accumulated or converged skeleton
    pub image: Image<Luma<u8>>,
    /// Which stop condition fired
    pub termination: Termination,
    /// Number of accumulation steps or thinning passes performed
    pub steps: u32,
}

/// Trait providing the two convergence-driven skeletonization strategies
///
/// Both strategies expect a binary input in {0, 1} and detect convergence by
/// exact pixel equality, never by a tolerance. They differ in mechanism and
/// in termination policy:
///
/// * the erosion-based (Lantuejoul) strategy accumulates morphological
///   differences under a hard step cap,
/// * the homotopic strategy iterates single thinning passes to a true
///   fixed point, optionally bounded by a pass ceiling.
pub trait SkeletonizeExt {
    /// The error type produced when the input is rejected
    type Error;

    /// Erosion-based skeletonization with the default step cap
    ///
    /// Equivalent to calling
    /// [`SkeletonizeExt::skeletonize_lantuejoul_with_cap`] with
    /// [`LANTUEJOUL_DEFAULT_STEP_CAP`].
    fn skeletonize_lantuejoul(&self) -> Result<SkeletonOutcome, Self::Error>;

    /// Erosion-based skeletonization with an explicit step cap
    ///
    /// Step `n` (starting at 0) erodes the *original* image by radius `n`,
    /// opens the result with parameter 1, and folds the saturating
    /// difference of the two into an accumulator. The loop stops when the
    /// accumulator no longer changes between steps, or when `max_steps`
    /// accumulation steps have run.
    ///
    /// The output lives in the {0, 255} domain produced by erosion.
    ///
    /// # Arguments
    ///
    /// * `max_steps` - Hard cap on accumulation steps
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    fn skeletonize_lantuejoul_with_cap(
        &self,
        max_steps: u32,
    ) -> Result<SkeletonOutcome, Self::Error>;

    /// Homotopic skeletonization, unbounded
    ///
    /// Equivalent to calling
    /// [`SkeletonizeExt::skeletonize_homotopic_with_ceiling`] with `None`.
    fn skeletonize_homotopic(&self) -> Result<SkeletonOutcome, Self::Error>;

    /// Homotopic skeletonization with an optional pass ceiling
    ///
    /// Applies single Zhang-Suen thinning passes to the previous output
    /// until two consecutive outputs are pixel-identical. Because thinning
    /// only ever deletes pixels, the loop always terminates; the ceiling
    /// exists as a cancellation point for callers that need a bounded
    /// worst case, and does not change any converged result.
    ///
    /// The output stays in the {0, 1} domain of its input.
    ///
    /// # Arguments
    ///
    /// * `max_passes` - Optional ceiling on thinning passes
    ///
    /// # Errors
    ///
    /// * [`MorphologyError::EmptyImage`] - The image has zero width or height
    fn skeletonize_homotopic_with_ceiling(
        &self,
        max_passes: Option<u32>,
    ) -> Result<SkeletonOutcome, Self::Error>;
}

impl SkeletonizeExt for Image<Luma<u8>> {
    type Error = MorphologyError;

    fn skeletonize_lantuejoul(&self) -> Result<SkeletonOutcome, MorphologyError> {
        self.skeletonize_lantuejoul_with_cap(LANTUEJOUL_DEFAULT_STEP_CAP)
    }

    fn skeletonize_lantuejoul_with_cap(
        &self,
        max_steps: u32,
    ) -> Result<SkeletonOutcome, MorphologyError> {
        let (width, height) = ensure_non_empty(self)?;

        let mut accumulator: Self = Image::new(width, height);
        let mut radius = 0u32;
        loop {
            let before = accumulator.clone();

            let eroded = self.erode(radius)?;
            let opened = eroded.open(1)?;
            accumulator = accumulator.saturating_add(&eroded.saturating_sub(&opened));

            if accumulator == before {
                debug!("lantuejoul skeleton converged after {} steps", radius + 1);
                return Ok(SkeletonOutcome {
                    image: accumulator,
                    termination: Termination::Converged,
                    steps: radius + 1,
                });
            }

            radius += 1;
            if radius >= max_steps {
                warn!("lantuejoul skeleton stopped at the step cap ({max_steps})");
                return Ok(SkeletonOutcome {
                    image: accumulator,
                    termination: Termination::ReachedCap,
                    steps: radius,
                });
            }
        }
    }

    fn skeletonize_homotopic(&self) -> Result<SkeletonOutcome, MorphologyError> {
        self.skeletonize_homotopic_with_ceiling(None)
    }

    fn skeletonize_homotopic_with_ceiling(
        &self,
        max_passes: Option<u32>,
    ) -> Result<SkeletonOutcome, MorphologyError> {
        ensure_non_empty(self)?;

        let mut current = self.clone();
        let mut passes = 0u32;
        loop {
            let next = current.thin(1)?;
            passes += 1;

            if next == current {
                debug!("homotopic skeleton converged after {passes} thinning passes");
                return Ok(SkeletonOutcome {
                    image: next,
                    termination: Termination::Converged,
                    steps: passes,
                });
            }

            if let Some(cap) = max_passes {
                if passes >= cap {
                    warn!("homotopic skeleton stopped at the pass ceiling ({cap})");
                    return Ok(SkeletonOutcome {
                        image: next,
                        termination: Termination::ReachedCap,
                        steps: passes,
                    });
                }
            }

            current = next;
        }
    }
}
