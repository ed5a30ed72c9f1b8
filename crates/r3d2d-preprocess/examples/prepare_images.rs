//! CT/X-ray Preparation Example
//!
//! Builds a synthetic CT volume and X-ray image, prepares them for 3D/2D
//! registration and prints the resulting intensity statistics:
//!
//! 1. Create a 16-bit CT volume and an 8-bit X-ray image
//! 2. Whiten the CT volume and window the X-ray image
//! 3. Build the homogeneous index grid of the X-ray detector
//!
//! Usage:
//!   cargo run --example prepare_images

use burn_ndarray::NdArray;
use r3d2d_core::spatial::Point3;
use r3d2d_preprocess::{homogeneous_grid, prepare_images_with, Image, PreprocessConfig};

type Backend = NdArray<f32>;

fn main() -> anyhow::Result<()> {
    println!("CT/X-ray Preparation Example");
    println!("============================\n");

    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .init();

    let device = Default::default();

    // Step 1: synthetic inputs
    let [d, h, w] = [8usize, 16, 16];
    let ct_pixels: Vec<i16> = (0..d * h * w)
        .map(|i| {
            let (z, y, x) = (i / (h * w), (i / w) % h, i % w);
            let r2 = (x as i32 - 8).pow(2) + (y as i32 - 8).pow(2) + (z as i32 - 4).pow(2);
            if r2 < 16 { 400 } else { -1000 }
        })
        .collect();
    let ct = Image::<Backend, 3>::from_pixels(&ct_pixels, [d, h, w], &device)?;

    let xray_pixels: Vec<u8> = (0..h * w).map(|i| ((i * 7) % 256) as u8).collect();
    let xray = Image::<Backend, 2>::from_pixels(&xray_pixels, [h, w], &device)?;

    println!("CT:    {:?} {}", ct.shape(), ct.pixel_type());
    println!("X-ray: {:?} {}", xray.shape(), xray.pixel_type());

    // Step 2: preparation
    let config = PreprocessConfig::default();
    let ct_position = Point3::new([0.0, 0.0, 0.0]);
    let detector_position = Point3::new([0.0, -400.0, 0.0]);
    let source_position = Point3::new([0.0, 600.0, 0.0]);

    let (ct_desc, xray_desc) = prepare_images_with(
        &config,
        &ct,
        &xray,
        ct_position,
        detector_position,
        source_position,
    )?;

    let ct_stats = ct_desc.img.statistics()?;
    println!(
        "\nCT after {}: mean={:.4}, std={:.4}, range=[{:.3}, {:.3}]",
        config.ct_normalization, ct_stats.mean, ct_stats.std, ct_stats.min, ct_stats.max
    );

    let xray_stats = xray_desc.img.statistics()?;
    println!(
        "X-ray after window (center {}, width {}): range=[{}, {}] {}",
        config.xray_window.center,
        config.xray_window.width,
        xray_stats.min,
        xray_stats.max,
        xray_desc.img.pixel_type()
    );
    println!("Source position: {:?}", xray_desc.source.to_vec());

    // Step 3: detector grid
    let grid = homogeneous_grid::<Backend, 2>(xray_desc.img.shape(), &device)?;
    println!("\nHomogeneous detector grid: {:?}", grid.dims());

    Ok(())
}
