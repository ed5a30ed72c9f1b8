//! Image types and operations.
//!
//! This module provides the typed Image, its pixel types, intensity
//! statistics and index grids.

pub mod image;
pub mod pixel;
pub mod statistics;
pub mod grid;

pub use image::Image;
pub use pixel::{Pixel, PixelKind, PixelType};
pub use statistics::ImageStatistics;
pub use grid::generate_grid;
