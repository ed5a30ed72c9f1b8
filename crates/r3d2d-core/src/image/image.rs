//! Typed image buffer.
//!
//! This module provides the Image struct which pairs tensor data with the
//! pixel type the samples were stored as.

use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};
use num_traits::ToPrimitive;

use super::pixel::{Pixel, PixelType};
use crate::error::{ImageError, Result};

/// N-dimensional image with a pixel type tag.
///
/// Samples live in a floating point tensor, which acts as the working copy for
/// all intensity operations. The [`PixelType`] records the storage type the
/// samples came from; for integer types every sample is integral and inside
/// the representable range of that type.
///
/// # Type Parameters
/// * `B` - The backend (CPU or GPU) for tensor operations
/// * `D` - The dimensionality of the image
///
/// # Examples
/// ```rust
/// use r3d2d_core::{Image, PixelType};
/// use burn_ndarray::NdArray;
///
/// type Backend = NdArray<f32>;
///
/// let device = Default::default();
/// let pixels: Vec<u16> = (0..12).collect();
/// let image = Image::<Backend, 2>::from_pixels(&pixels, [3, 4], &device).unwrap();
/// assert_eq!(image.shape(), [3, 4]);
/// assert_eq!(image.pixel_type(), PixelType::U16);
/// ```
#[derive(Debug, Clone)]
pub struct Image<B: Backend, const D: usize> {
    /// The sample data, potentially on GPU.
    data: Tensor<B, D>,
    /// Storage type of the samples.
    pixel_type: PixelType,
}

impl<B: Backend, const D: usize> Image<B, D> {
    /// Create a new image from a tensor and the pixel type of its samples.
    ///
    /// The caller guarantees that integer-typed data holds representable values;
    /// use [`Image::from_samples`] for checked construction.
    pub fn new(data: Tensor<B, D>, pixel_type: PixelType) -> Self {
        Self { data, pixel_type }
    }

    /// Wrap a float tensor as an `f32` image.
    pub fn from_float_tensor(data: Tensor<B, D>) -> Self {
        Self::new(data, PixelType::F32)
    }

    /// Create an image from a typed, row-major sample buffer.
    ///
    /// # Errors
    /// `ShapeMismatch` when `pixels.len()` differs from the element count of `shape`.
    pub fn from_pixels<P: Pixel>(pixels: &[P], shape: [usize; D], device: &B::Device) -> Result<Self> {
        let samples = pixels
            .iter()
            .map(|p| p.to_f64().unwrap_or(f64::NAN))
            .collect();
        Self::from_samples(samples, shape, P::PIXEL_TYPE, device)
    }

    /// Create an image from row-major `f64` samples and a runtime pixel type.
    ///
    /// # Errors
    /// * `EmptyImage` when `shape` has a zero extent
    /// * `ShapeMismatch` when the buffer length does not match `shape`
    /// * `InvalidConfiguration` when an integer pixel type receives a sample
    ///   that is fractional, outside the type's range, or not stored exactly
    ///   by the backend's float element (e.g. `16_777_217` on an `f32` backend)
    pub fn from_samples(
        samples: Vec<f64>,
        shape: [usize; D],
        pixel_type: PixelType,
        device: &B::Device,
    ) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if expected == 0 {
            return Err(ImageError::EmptyImage);
        }
        if samples.len() != expected {
            return Err(ImageError::ShapeMismatch {
                expected: shape.to_vec(),
                actual: vec![samples.len()],
            });
        }

        if let Some((min, max)) = pixel_type.bounds() {
            if let Some(bad) = samples
                .iter()
                .find(|&&v| v.fract() != 0.0 || v < min || v > max)
            {
                return Err(ImageError::invalid_configuration(format!(
                    "sample {} is not representable as {}",
                    bad, pixel_type
                )));
            }
            if let Some(bad) = samples
                .iter()
                .find(|&&v| !PixelType::is_stored_exactly::<B::FloatElem>(v))
            {
                return Err(ImageError::invalid_configuration(format!(
                    "{} sample {} cannot be stored exactly by the backend float element",
                    pixel_type, bad
                )));
            }
        }

        tracing::trace!("Creating {} image with shape {:?}", pixel_type, shape);
        let data = TensorData::new(samples, Shape::new(shape)).convert::<B::FloatElem>();
        Ok(Self::new(Tensor::from_data(data, device), pixel_type))
    }

    /// Get the image data tensor.
    pub fn data(&self) -> &Tensor<B, D> {
        &self.data
    }

    /// Consume the image and return its data tensor.
    pub fn into_data(self) -> Tensor<B, D> {
        self.data
    }

    /// Get the pixel type of the samples.
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    /// Get the image shape as an array.
    pub fn shape(&self) -> [usize; D] {
        self.data.dims()
    }

    /// Total number of samples.
    pub fn num_elements(&self) -> usize {
        self.shape().iter().product()
    }

    /// Copy the samples out in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_data().iter::<f64>().collect()
    }
}
