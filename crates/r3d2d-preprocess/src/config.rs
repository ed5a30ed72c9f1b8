//! Preprocessing configuration.
//!
//! Defaults reproduce the fixed parameters of the CT/X-ray preparation step:
//! whitening for the CT volume and a window of center 60, width 120 for the
//! X-ray image.

use std::fmt;
use std::str::FromStr;

use r3d2d_core::{ImageError, Result};
use serde::{Deserialize, Serialize};

use crate::validation::validate_window;

/// Intensity normalization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    /// Zero mean, unit variance.
    #[default]
    Whitening,
    /// Rescale to `[0, 1]` using the observed min and max.
    Range,
}

impl NormalizationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationMode::Whitening => "whitening",
            NormalizationMode::Range => "range",
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMode {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "whitening" => Ok(NormalizationMode::Whitening),
            "range" => Ok(NormalizationMode::Range),
            other => Err(ImageError::invalid_mode(other)),
        }
    }
}

/// Display window given by its center and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub center: f64,
    pub width: f64,
}

impl WindowSettings {
    /// Window applied to X-ray images before registration.
    pub const XRAY: WindowSettings = WindowSettings {
        center: 60.0,
        width: 120.0,
    };

    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Lower edge, `center - width / 2`.
    pub fn lower(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Upper edge, `center + width / 2`.
    pub fn upper(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self::XRAY
    }
}

/// Parameters of [`prepare_images_with`](crate::prepare::prepare_images_with).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Normalization applied to the CT volume.
    pub ct_normalization: NormalizationMode,
    /// Window applied to the X-ray image.
    pub xray_window: WindowSettings,
}

impl PreprocessConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CT normalization mode.
    pub fn with_ct_normalization(mut self, mode: NormalizationMode) -> Self {
        self.ct_normalization = mode;
        self
    }

    /// Set the X-ray window.
    pub fn with_xray_window(mut self, center: f64, width: f64) -> Self {
        self.xray_window = WindowSettings::new(center, width);
        self
    }

    /// Check the window parameters.
    pub fn validate(&self) -> Result<()> {
        validate_window(self.xray_window.center, self.xray_window.width)
    }
}
