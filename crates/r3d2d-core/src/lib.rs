//! Core types for 3D/2D registration preprocessing.
//!
//! Images are burn tensors tagged with the pixel type their samples were
//! stored as, so intensity operations can decide at runtime whether the
//! result is bounded by an integer range.

pub mod error;
pub mod image;
pub mod spatial;

pub use error::{ImageError, Result};
pub use image::{Image, ImageStatistics, Pixel, PixelKind, PixelType};
pub use spatial::Point;
