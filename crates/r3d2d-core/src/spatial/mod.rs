//! Spatial types for representing positions.
//!
//! Points are based on nalgebra and carry physical coordinates such as the
//! placement of a volume, a detector or an X-ray source.

pub mod point;

pub use point::Point;

/// 3D position of a volume, detector or source.
pub type Point3 = Point<3>;
