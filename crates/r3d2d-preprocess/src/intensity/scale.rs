//! Linear intensity scaling.

use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use r3d2d_core::{Image, PixelType, Result};

use crate::validation::validate_scale_params;

/// Shift intensities by `slope * offset`: `output = input - slope * offset`.
///
/// The arithmetic runs on the floating point working copy. For integer pixel
/// types the result is clamped to the type's representable range and
/// truncated toward zero, and the output keeps the input's pixel type. The
/// clamp bounds are narrowed to values the backend's float element stores
/// exactly, so no sample rounds past the type's range. Float
/// images are not clamped and come back as `PixelType::F64`.
///
/// # Errors
/// `InvalidConfiguration` when `slope` or `offset` is not finite.
pub fn scale_image<B: Backend, const D: usize>(
    image: &Image<B, D>,
    slope: f64,
    offset: f64,
) -> Result<Image<B, D>> {
    validate_scale_params(slope, offset)?;

    let shift = slope * offset;
    let scaled = image.data().clone().sub_scalar(shift);

    let output = match image.pixel_type().bounds_in::<B::FloatElem>() {
        Some((min, max)) => {
            tracing::debug!(
                "Scaling {} image by shift {:.6}, clamped to [{}, {}]",
                image.pixel_type(),
                shift,
                min,
                max
            );
            Image::new(truncate(scaled.clamp(min, max)), image.pixel_type())
        }
        None => {
            tracing::debug!("Scaling {} image by shift {:.6}", image.pixel_type(), shift);
            Image::new(scaled, PixelType::F64)
        }
    };

    Ok(output)
}

/// Round toward zero, matching a float to integer cast.
fn truncate<B: Backend, const D: usize>(data: Tensor<B, D>) -> Tensor<B, D> {
    let negative = data.clone().lower_elem(0.0);
    data.clone().floor().mask_where(negative, data.ceil())
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use r3d2d_core::ImageError;

    type Backend = NdArray<f32>;

    #[test]
    fn test_float_image_is_shifted_without_clamping() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[-1000.0f32, 0.0, 2.5, 1e6], [4], &device).unwrap();
        let out = scale_image(&image, 2.0, 3.0).unwrap();

        assert_eq!(out.pixel_type(), PixelType::F64);
        assert_eq!(out.to_vec(), vec![-1006.0, -6.0, -3.5, 999994.0]);
    }

    #[test]
    fn test_unsigned_image_is_clamped() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[0u8, 10, 100, 250], [4], &device).unwrap();

        // shift of +20
        let out = scale_image(&image, 4.0, 5.0).unwrap();
        assert_eq!(out.pixel_type(), PixelType::U8);
        assert_eq!(out.to_vec(), vec![0.0, 0.0, 80.0, 230.0]);

        // shift of -20
        let out = scale_image(&image, 4.0, -5.0).unwrap();
        assert_eq!(out.to_vec(), vec![20.0, 30.0, 120.0, 255.0]);
    }

    #[test]
    fn test_signed_image_truncates_toward_zero() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[-3i16, 0, 3, 32767], [4], &device).unwrap();

        // shift of 0.5
        let out = scale_image(&image, 0.5, 1.0).unwrap();
        assert_eq!(out.pixel_type(), PixelType::I16);
        assert_eq!(out.to_vec(), vec![-3.0, 0.0, 2.0, 32766.0]);

        // shift of -0.5
        let out = scale_image(&image, 0.5, -1.0).unwrap();
        assert_eq!(out.to_vec(), vec![-2.0, 0.0, 3.0, 32767.0]);
    }

    #[test]
    fn test_wide_signed_image_is_clamped_inside_range() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[0i32, 5, -7], [3], &device).unwrap();

        let out = scale_image(&image, 1.0, -3.0e9).unwrap();
        assert_eq!(out.pixel_type(), PixelType::I32);
        for v in out.to_vec() {
            assert!(v <= i32::MAX as f64, "{} above i32::MAX", v);
            assert_eq!(v, 2147483520.0);
        }

        let out = scale_image(&image, 1.0, 3.0e9).unwrap();
        assert_eq!(out.to_vec(), vec![i32::MIN as f64; 3]);
    }

    #[test]
    fn test_wide_unsigned_image_is_clamped_inside_range() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[0u32, 1000, 16_777_216], [3], &device).unwrap();

        let out = scale_image(&image, 2.0, -4.0e9).unwrap();
        assert_eq!(out.pixel_type(), PixelType::U32);
        for v in out.to_vec() {
            assert!(v <= u32::MAX as f64, "{} above u32::MAX", v);
        }

        let out = scale_image(&image, 2.0, 500.0).unwrap();
        assert_eq!(out.to_vec(), vec![0.0, 0.0, 16_776_216.0]);
    }

    #[test]
    fn test_wide_signed_image_on_f64_backend_keeps_exact_maximum() {
        let device = Default::default();
        let image = Image::<NdArray<f64>, 1>::from_pixels(&[0i32, i32::MAX - 1], [2], &device).unwrap();

        let out = scale_image(&image, 1.0, -10.0).unwrap();
        assert_eq!(out.to_vec(), vec![10.0, i32::MAX as f64]);
    }

    #[test]
    fn test_input_is_untouched() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[1u16, 2, 3], [3], &device).unwrap();
        let _ = scale_image(&image, 10.0, 10.0).unwrap();
        assert_eq!(image.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_non_finite_parameters() {
        let device = Default::default();
        let image = Image::<Backend, 1>::from_pixels(&[1u8, 2], [2], &device).unwrap();
        let err = scale_image(&image, f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, ImageError::InvalidConfiguration(_)));
    }
}
