//! Image preprocessing for 3D/2D registration.
//!
//! Intensity normalization, linear scaling, display windowing, homogeneous
//! coordinates and the CT/X-ray preparation step that combines them.

pub mod config;
pub mod homogeneous;
pub mod intensity;
pub mod prepare;
pub mod validation;

pub use config::{NormalizationMode, PreprocessConfig, WindowSettings};
pub use homogeneous::{add_homog_coord, add_homog_coord_raw, homogeneous_grid, homogeneous_points};
pub use intensity::{
    normalize_image, normalize_image_str, scale_image, window_image, window_image_with, window_mapping,
};
pub use prepare::{prepare_images, prepare_images_with, CtDescriptor, XrayDescriptor};

pub use r3d2d_core::{Image, ImageError, PixelType, Point, Result};
