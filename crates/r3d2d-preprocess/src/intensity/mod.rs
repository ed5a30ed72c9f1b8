//! Intensity mappings.
//!
//! Every function borrows its input and returns a new image.

pub mod normalize;
pub mod scale;
pub mod window;

pub use normalize::{normalize_image, normalize_image_str};
pub use scale::scale_image;
pub use window::{window_image, window_image_with, window_mapping};
