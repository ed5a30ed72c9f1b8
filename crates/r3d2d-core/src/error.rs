//! Error types for image preprocessing.
//!
//! Every fallible operation in the workspace returns [`ImageError`]. Errors are
//! raised where the failing computation happens and propagated unchanged.

use thiserror::Error;

/// Main error type for image preprocessing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Unrecognized normalization mode name.
    #[error("Invalid normalization mode: {0}")]
    InvalidNormalizationMode(String),

    /// A computation would divide by zero (constant image, zero window width).
    #[error("Division by zero: {0}")]
    DivideByZero(String),

    /// Input has the wrong number of axes.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Buffer length or extents do not match the requested shape.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Element type cannot be interpreted as a supported pixel type.
    #[error("Unsupported pixel type: {0}")]
    UnsupportedPixelType(String),

    /// Reduction over an image without samples.
    #[error("Image contains no samples")]
    EmptyImage,

    /// Non-finite intensities or statistics.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid parameter value.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for image preprocessing operations.
pub type Result<T> = std::result::Result<T, ImageError>;

impl ImageError {
    /// Create an invalid normalization mode error.
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidNormalizationMode(mode.into())
    }

    /// Create a division by zero error.
    pub fn divide_by_zero(msg: impl Into<String>) -> Self {
        Self::DivideByZero(msg.into())
    }

    /// Create an invalid shape error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Create an unsupported pixel type error.
    pub fn unsupported_pixel_type(name: impl Into<String>) -> Self {
        Self::UnsupportedPixelType(name.into())
    }

    /// Create a numerical instability error.
    pub fn numerical_instability(msg: impl Into<String>) -> Self {
        Self::NumericalInstability(msg.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
