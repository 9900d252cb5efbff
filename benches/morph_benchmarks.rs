//! Performance benchmarks for imageops-morph
//!
//! This benchmark suite measures the windowed morphology passes and the
//! convergence-driven skeletonization strategies to track regressions.

use criterion::*;
use image::Luma;
use imageops_morph::{
    Image, MorphologyExt, PointArithmeticExt, SkeletonizeExt, ThinningExt, ThresholdExt,
};
use itertools::iproduct;
use std::hint::black_box;

/// Helper function to create a grayscale image with a gradient pattern
fn create_gray_image(width: u32, height: u32) -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(width, height);

    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let value = ((x * 255) / width.max(1) + (y * 255) / height.max(1)) / 2;
        image.put_pixel(x, y, Luma([value as u8]));
    });

    image
}

/// Helper function to create a binary blob occupying the central region
fn create_binary_blob(width: u32, height: u32) -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(width, height);

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = (width.min(height) as f32) / 3.0;

    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let distance = (x as f32 - center_x).hypot(y as f32 - center_y);
        if distance <= radius {
            image.put_pixel(x, y, Luma([1]));
        }
    });

    image
}

fn bench_point_ops(c: &mut Criterion) {
    let sizes = vec![(64, 64), (256, 256), (512, 512)];

    let mut group = c.benchmark_group("point_ops");
    group.sample_size(20);

    for (width, height) in sizes {
        let image = create_gray_image(width, height);

        group.bench_with_input(
            BenchmarkId::new("threshold", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.threshold(127))),
        );

        group.bench_with_input(
            BenchmarkId::new("saturating_add", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.saturating_add(img))),
        );
    }

    group.finish();
}

fn bench_structuring_ops(c: &mut Criterion) {
    let sizes = vec![(64, 64), (256, 256)];

    let mut group = c.benchmark_group("structuring_ops");
    group.sample_size(10);

    for (width, height) in sizes {
        let image = create_gray_image(width, height).threshold(127);

        group.bench_with_input(
            BenchmarkId::new("erode_r1", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.erode(1).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("dilate_k3", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.dilate(3).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("open_k3", format!("{}x{}", width, height)),
            &image,
            |b, img| b.iter(|| black_box(img.open(3).unwrap())),
        );
    }

    group.finish();
}

fn bench_skeletonization(c: &mut Criterion) {
    let sizes = vec![(64, 64), (128, 128)];

    let mut group = c.benchmark_group("skeletonization");
    group.sample_size(10);

    for (width, height) in sizes {
        let blob = create_binary_blob(width, height);

        group.bench_with_input(
            BenchmarkId::new("thin_10_passes", format!("{}x{}", width, height)),
            &blob,
            |b, img| b.iter(|| black_box(img.thin(10).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("homotopic_skeleton", format!("{}x{}", width, height)),
            &blob,
            |b, img| b.iter(|| black_box(img.skeletonize_homotopic().unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("lantuejoul_cap_8", format!("{}x{}", width, height)),
            &blob,
            |b, img| b.iter(|| black_box(img.skeletonize_lantuejoul_with_cap(8).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_point_ops,
    bench_structuring_ops,
    bench_skeletonization,
);
criterion_main!(benches);
