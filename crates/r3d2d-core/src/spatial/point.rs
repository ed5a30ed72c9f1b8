//! Point type for representing spatial coordinates.
//!
//! Points represent positions in physical space.

use nalgebra::Point as NaPoint;
use serde::{Deserialize, Serialize};

use crate::error::{ImageError, Result};

/// A point in D-dimensional space.
///
/// Used for the placement of the CT volume, the X-ray detector and the X-ray
/// source handed to registration.
///
/// This is a thin wrapper around nalgebra's Point to provide
/// domain-specific functionality while maintaining all nalgebra operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<const D: usize>(pub NaPoint<f64, D>);

impl<const D: usize> Point<D> {
    /// Create a new point from coordinates.
    pub fn new(coords: [f64; D]) -> Self {
        Self(NaPoint::from(coords))
    }

    /// Create a point at the origin (all coordinates zero).
    pub fn origin() -> Self {
        Self(NaPoint::origin())
    }

    /// Create a new point from a slice of coordinates.
    ///
    /// # Errors
    /// `ShapeMismatch` when the slice length is not `D`.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        if coords.len() != D {
            return Err(ImageError::ShapeMismatch {
                expected: vec![D],
                actual: vec![coords.len()],
            });
        }
        let mut point = Self::origin();
        point.0.coords.copy_from_slice(coords);
        Ok(point)
    }

    /// Convert point to a vector of coordinates.
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.coords.iter().copied().collect()
    }

    /// Coordinates followed by a trailing `1.0`.
    pub fn to_homogeneous_vec(&self) -> Vec<f64> {
        let mut coords = self.to_vec();
        coords.push(1.0);
        coords
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> std::ops::Index<usize> for Point<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0.coords[index]
    }
}
