//! Intensity normalization.

use burn::tensor::backend::Backend;
use r3d2d_core::{Image, PixelType, Result};

use crate::config::NormalizationMode;
use crate::validation::ensure_spread;

/// Normalize the intensities of an image.
///
/// * [`NormalizationMode::Whitening`]: `(x - mean) / std` with the population
///   standard deviation.
/// * [`NormalizationMode::Range`]: `(x - min) / (max - min)`.
///
/// The result is a floating point image (`PixelType::F64`) of the same shape.
///
/// # Errors
/// * `DivideByZero` for a constant image
/// * `NumericalInstability` when the image holds NaN or infinite samples
/// * `EmptyImage` for an image without samples
pub fn normalize_image<B: Backend, const D: usize>(
    image: &Image<B, D>,
    mode: NormalizationMode,
) -> Result<Image<B, D>> {
    let stats = image.statistics()?;
    ensure_spread(&stats)?;

    let data = image.data().clone();
    let normalized = match mode {
        NormalizationMode::Whitening => data.sub_scalar(stats.mean).div_scalar(stats.std),
        NormalizationMode::Range => data.sub_scalar(stats.min).div_scalar(stats.spread()),
    };

    tracing::debug!(
        "Normalized {:?} {} image ({}): mean={:.6}, std={:.6}, min={:.6}, max={:.6}",
        image.shape(),
        image.pixel_type(),
        mode,
        stats.mean,
        stats.std,
        stats.min,
        stats.max
    );

    Ok(Image::new(normalized, PixelType::F64))
}

/// Normalize using a mode name (`"whitening"` or `"range"`).
///
/// # Errors
/// `InvalidNormalizationMode` for any other name, otherwise as [`normalize_image`].
pub fn normalize_image_str<B: Backend, const D: usize>(
    image: &Image<B, D>,
    mode: &str,
) -> Result<Image<B, D>> {
    normalize_image(image, mode.parse()?)
}
