//! Intensity statistics.

use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor};
use serde::{Deserialize, Serialize};

use super::image::Image;
use crate::error::{ImageError, Result};

/// Summary statistics of the samples of an image.
///
/// `std` is the population standard deviation (divides by `count`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageStatistics {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl ImageStatistics {
    /// `max - min`.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    /// True when every sample has the same value.
    pub fn is_constant(&self) -> bool {
        self.max == self.min
    }

    /// True when none of the statistics is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.std.is_finite() && self.min.is_finite() && self.max.is_finite()
    }
}

impl<B: Backend, const D: usize> Image<B, D> {
    /// Compute mean, population standard deviation, min and max.
    ///
    /// # Errors
    /// `EmptyImage` when the image has no samples.
    pub fn statistics(&self) -> Result<ImageStatistics> {
        let flat = self.flat_samples()?;
        let count = flat.dims()[0];

        let mean = flat.clone().mean().into_scalar().elem::<f64>();
        let min = flat.clone().min().into_scalar().elem::<f64>();
        let max = flat.clone().max().into_scalar().elem::<f64>();
        let variance = flat
            .sub_scalar(mean)
            .powf_scalar(2.0)
            .mean()
            .into_scalar()
            .elem::<f64>();

        Ok(ImageStatistics {
            mean,
            std: variance.sqrt(),
            min,
            max,
            count,
        })
    }

    /// Observed `(min, max)` of the samples.
    ///
    /// # Errors
    /// `EmptyImage` when the image has no samples.
    pub fn intensity_range(&self) -> Result<(f64, f64)> {
        let flat = self.flat_samples()?;
        let min = flat.clone().min().into_scalar().elem::<f64>();
        let max = flat.max().into_scalar().elem::<f64>();
        Ok((min, max))
    }

    fn flat_samples(&self) -> Result<Tensor<B, 1>> {
        let count = self.num_elements();
        if count == 0 {
            return Err(ImageError::EmptyImage);
        }
        Ok(self.data().clone().reshape([count]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type Backend = NdArray<f32>;

    #[test]
    fn test_statistics_population_std() {
        let device = Default::default();
        let pixels: Vec<u8> = vec![2, 4, 4, 4, 5, 5, 7, 9];
        let image = Image::<Backend, 2>::from_pixels(&pixels, [2, 4], &device).unwrap();
        let stats = image.statistics().unwrap();

        assert!((stats.mean - 5.0).abs() < 1e-6);
        assert!((stats.std - 2.0).abs() < 1e-6, "Expected population std 2.0, got {}", stats.std);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 8);
        assert!(!stats.is_constant());
        assert_eq!(stats.spread(), 7.0);
    }

    #[test]
    fn test_statistics_constant_image() {
        let device = Default::default();
        let image = Image::<Backend, 2>::from_pixels(&[5.0f32; 9], [3, 3], &device).unwrap();
        let stats = image.statistics().unwrap();
        assert!(stats.is_constant());
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_intensity_range() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[-1.5f32, 3.25, 0.0], [3], &device).unwrap();
        assert_eq!(image.intensity_range().unwrap(), (-1.5, 3.25));
    }
}
