//! Display windowing.

use burn::tensor::backend::Backend;
use r3d2d_core::{Image, Result};

use super::scale::scale_image;
use crate::config::WindowSettings;
use crate::validation::validate_window;

/// Compute the `(slope, offset)` pair used by [`window_image`].
///
/// The value range is the type range for integer images and the observed
/// intensity range for float images:
///
/// ```text
/// slope  = (max_value - min_value) / width
/// offset = -slope * (center - width / 2)
/// ```
///
/// # Errors
/// * `DivideByZero` when `width` is zero
/// * `InvalidConfiguration` when `center` or `width` is not finite
/// * `EmptyImage` for a float image without samples
pub fn window_mapping<B: Backend, const D: usize>(
    image: &Image<B, D>,
    center: f64,
    width: f64,
) -> Result<(f64, f64)> {
    validate_window(center, width)?;

    let (min_value, max_value) = match image.pixel_type().bounds() {
        Some(bounds) => bounds,
        None => image.intensity_range()?,
    };

    let slope = (max_value - min_value) / width;
    let offset = -slope * (center - width / 2.0);
    Ok((slope, offset))
}

/// Apply a linear window given by its center and width.
///
/// Derives slope and offset with [`window_mapping`] and delegates to
/// [`scale_image`], so integer results are clamped to their type range.
pub fn window_image<B: Backend, const D: usize>(
    image: &Image<B, D>,
    center: f64,
    width: f64,
) -> Result<Image<B, D>> {
    let (slope, offset) = window_mapping(image, center, width)?;
    tracing::debug!(
        "Window center={} width={} on {} image: slope={:.6}, offset={:.6}",
        center,
        width,
        image.pixel_type(),
        slope,
        offset
    );
    scale_image(image, slope, offset)
}

/// [`window_image`] with the parameters taken from `window`.
pub fn window_image_with<B: Backend, const D: usize>(
    image: &Image<B, D>,
    window: &WindowSettings,
) -> Result<Image<B, D>> {
    window_image(image, window.center, window.width)
}
