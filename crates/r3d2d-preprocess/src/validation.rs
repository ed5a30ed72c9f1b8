//! Validation utilities for preprocessing parameters.
//!
//! This module rejects inputs that would make an intensity mapping divide by
//! zero or produce non-finite samples.

use r3d2d_core::{ImageError, ImageStatistics, Result};

/// Validate a window center and width.
pub fn validate_window(center: f64, width: f64) -> Result<()> {
    if !center.is_finite() || !width.is_finite() {
        return Err(ImageError::invalid_configuration(format!(
            "window center and width must be finite, got center={}, width={}",
            center, width
        )));
    }

    if width == 0.0 {
        return Err(ImageError::divide_by_zero("invalid window width: width must be non-zero"));
    }

    Ok(())
}

/// Validate the slope and offset of a linear scaling.
pub fn validate_scale_params(slope: f64, offset: f64) -> Result<()> {
    if !slope.is_finite() || !offset.is_finite() {
        return Err(ImageError::invalid_configuration(format!(
            "slope and offset must be finite, got slope={}, offset={}",
            slope, offset
        )));
    }

    Ok(())
}

/// Ensure an image's statistics allow normalization.
///
/// Constant images have no spread to divide by.
pub fn ensure_spread(stats: &ImageStatistics) -> Result<()> {
    if !stats.is_finite() {
        return Err(ImageError::numerical_instability(format!(
            "image statistics are not finite: mean={}, std={}, min={}, max={}",
            stats.mean, stats.std, stats.min, stats.max
        )));
    }

    if stats.is_constant() || stats.std == 0.0 {
        tracing::warn!("Cannot normalize constant image (value {})", stats.min);
        return Err(ImageError::divide_by_zero(format!(
            "constant image (all {} samples equal {})",
            stats.count, stats.min
        )));
    }

    Ok(())
}
