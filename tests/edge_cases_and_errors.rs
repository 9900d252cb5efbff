//! Edge case and error condition tests
//!
//! This test suite focuses on boundary values, degenerate inputs and the
//! error paths of the dispatch surface.

use image::Luma;
use imageops_morph::{
    apply_operation, Image, MorphologyError, MorphologyExt, Operation, OperationParams,
    SkeletonizeExt, Termination, ThickeningExt, ThinningExt, ThresholdExt,
};

/// Helper to create a 1x1 image with the given value
fn single_pixel(value: u8) -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(1, 1);
    image.put_pixel(0, 0, Luma([value]));
    image
}

#[test]
fn test_single_pixel_image_operations() {
    let image = single_pixel(1);

    // The clipped erosion window degenerates to the pixel itself.
    assert_eq!(image.erode(1).unwrap().get_pixel(0, 0)[0], 255);

    // No full 3x3 window fits, so dilation is pure copy-through.
    assert_eq!(image.dilate(3).unwrap(), image);

    // A lone foreground pixel has no neighbors and survives thinning.
    assert_eq!(image.thin(5).unwrap(), image);
    assert_eq!(image.thicken(5).unwrap(), image);
}

#[test]
fn test_single_pixel_lantuejoul_converges_to_background() {
    // Radius 0 normalizes the pixel to 255 and the clipped opening gives
    // it straight back, so the very first difference is already empty.
    let outcome = single_pixel(1).skeletonize_lantuejoul().unwrap();

    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.steps, 1);
    assert_eq!(outcome.image, single_pixel(0));
}

#[test]
fn test_threshold_extreme_levels() {
    let image = single_pixel(0);

    // Level 0 classifies every pixel as foreground.
    assert_eq!(image.threshold(0).get_pixel(0, 0)[0], 255);

    // Level 255 keeps only saturated pixels.
    assert_eq!(single_pixel(254).threshold(255).get_pixel(0, 0)[0], 0);
    assert_eq!(single_pixel(255).threshold(255).get_pixel(0, 0)[0], 255);
}

#[test]
fn test_empty_images_are_rejected_by_windowed_operations() {
    let empty: Image<Luma<u8>> = Image::new(0, 0);
    let params = OperationParams::default();

    let windowed = [
        Operation::Erosion,
        Operation::Dilation,
        Operation::Opening,
        Operation::Closing,
        Operation::Thinning,
        Operation::Thickening,
        Operation::LantuejoulSkeletonization,
        Operation::HomotopicSkeletonization,
    ];

    for operation in windowed {
        assert!(
            matches!(
                apply_operation(&empty, operation, None, &params),
                Err(MorphologyError::EmptyImage { .. })
            ),
            "operation {} must reject an empty image",
            operation.name()
        );
    }
}

#[test]
fn test_zero_kernel_is_rejected_by_dilation_family() {
    let image = single_pixel(255);
    let params = OperationParams {
        kernel_size: 0,
        ..OperationParams::default()
    };

    for operation in [Operation::Dilation, Operation::Opening, Operation::Closing] {
        assert_eq!(
            apply_operation(&image, operation, None, &params),
            Err(MorphologyError::InvalidKernelSize { kernel_size: 0 }),
            "operation {} must reject kernel size 0",
            operation.name()
        );
    }

    // Erosion interprets the shared parameter as a radius, where 0 is the
    // legal 1x1 window.
    assert!(apply_operation(&image, Operation::Erosion, None, &params).is_ok());
}

#[test]
fn test_mixed_value_domains_are_permitted() {
    // Adding a {0, 1} binary image to a grayscale image is allowed and
    // simply produces clipped arithmetic, not an error.
    let gray = single_pixel(254);
    let binary = single_pixel(1);

    let sum = apply_operation(
        &gray,
        Operation::Addition,
        Some(&binary),
        &OperationParams::default(),
    )
    .unwrap();
    assert_eq!(sum.get_pixel(0, 0)[0], 255);

    let diff = apply_operation(
        &binary,
        Operation::Subtraction,
        Some(&gray),
        &OperationParams::default(),
    )
    .unwrap();
    assert_eq!(diff.get_pixel(0, 0)[0], 0);
}

#[test]
fn test_missing_operand_error_names_the_operation() {
    let image = single_pixel(10);
    let error = apply_operation(
        &image,
        Operation::Addition,
        None,
        &OperationParams::default(),
    )
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Operation `addition` requires a secondary operand image"
    );
}

#[test]
fn test_thin_two_pixel_line_vanishes_in_one_pass() {
    // Every pixel of a 2-pixel-wide line satisfies the deletion rules, so
    // the simultaneous application removes the whole line in a single
    // pass, while a 1-pixel-wide line is a fixed point.
    let mut wide: Image<Luma<u8>> = Image::new(6, 2);
    for pixel in wide.pixels_mut() {
        pixel[0] = 1;
    }

    let thinned = wide.thin(1).unwrap();
    assert!(thinned.pixels().all(|p| p[0] == 0));
}

#[test]
fn test_zero_iterations_are_identity_for_both_engines() {
    let mut image: Image<Luma<u8>> = Image::new(3, 3);
    image.put_pixel(1, 1, Luma([1]));
    image.put_pixel(2, 1, Luma([1]));

    assert_eq!(image.thin(0).unwrap(), image);
    assert_eq!(image.thicken(0).unwrap(), image);
}
