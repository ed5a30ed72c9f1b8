//! CT and X-ray input preparation.
//!
//! Builds the two descriptors consumed by 3D/2D registration: a normalized CT
//! volume with its position, and a windowed X-ray image with its position and
//! the position of the X-ray source. Positions are moved through untouched,
//! so any pose representation can be used.

use burn::tensor::backend::Backend;
use r3d2d_core::{Image, Result};

use crate::config::PreprocessConfig;
use crate::intensity::{normalize_image, window_image_with};

/// Prepared CT input.
#[derive(Debug, Clone)]
pub struct CtDescriptor<B: Backend, const D: usize, P> {
    /// Normalized intensities.
    pub img: Image<B, D>,
    /// Placement of the volume.
    pub position: P,
}

/// Prepared X-ray input.
#[derive(Debug, Clone)]
pub struct XrayDescriptor<B: Backend, const D: usize, P, S> {
    /// Windowed intensities.
    pub img: Image<B, D>,
    /// Placement of the detector.
    pub position: P,
    /// Position of the X-ray source.
    pub source: S,
}

/// Prepare a CT volume and an X-ray image with the default configuration.
///
/// The CT image is whitened and the X-ray image is windowed with center 60
/// and width 120. See [`prepare_images_with`].
pub fn prepare_images<B, const DC: usize, const DX: usize, PC, PX, S>(
    ct_image: &Image<B, DC>,
    xray_image: &Image<B, DX>,
    ct_position: PC,
    xray_position: PX,
    source_position: S,
) -> Result<(CtDescriptor<B, DC, PC>, XrayDescriptor<B, DX, PX, S>)>
where
    B: Backend,
{
    prepare_images_with(
        &PreprocessConfig::default(),
        ct_image,
        xray_image,
        ct_position,
        xray_position,
        source_position,
    )
}

/// Prepare a CT volume and an X-ray image.
///
/// # Errors
/// Any error of the configuration check, of [`normalize_image`] on the CT
/// image or of [`window_image_with`] on the X-ray image, unchanged. No
/// descriptor is returned when either step fails.
pub fn prepare_images_with<B, const DC: usize, const DX: usize, PC, PX, S>(
    config: &PreprocessConfig,
    ct_image: &Image<B, DC>,
    xray_image: &Image<B, DX>,
    ct_position: PC,
    xray_position: PX,
    source_position: S,
) -> Result<(CtDescriptor<B, DC, PC>, XrayDescriptor<B, DX, PX, S>)>
where
    B: Backend,
{
    config.validate()?;

    tracing::debug!(
        "Preparing CT {:?} ({}) and X-ray {:?} ({})",
        ct_image.shape(),
        config.ct_normalization,
        xray_image.shape(),
        xray_image.pixel_type()
    );

    let ct = CtDescriptor {
        img: normalize_image(ct_image, config.ct_normalization)?,
        position: ct_position,
    };

    let xray = XrayDescriptor {
        img: window_image_with(xray_image, &config.xray_window)?,
        position: xray_position,
        source: source_position,
    };

    Ok((ct, xray))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use r3d2d_core::spatial::Point3;
    use r3d2d_core::{ImageError, PixelType};

    use crate::config::NormalizationMode;

    type Backend = NdArray<f32>;

    #[test]
    fn test_prepare_passes_positions_through() {
        let device = Default::default();
        let ct = Image::<Backend, 3>::from_pixels(&[0i16, 10, 20, 30, 40, 50, 60, 70], [2, 2, 2], &device).unwrap();
        let xray = Image::<Backend, 2>::from_pixels(&[0u16, 100, 200, 300], [2, 2], &device).unwrap();

        let ct_position = Point3::new([0.0, 0.0, 0.0]);
        let xray_position = Point3::new([0.0, -500.0, 0.0]);
        let source = Point3::new([0.0, 1000.0, 0.0]);

        let (ct_desc, xray_desc) = prepare_images(&ct, &xray, ct_position, xray_position, source).unwrap();

        assert_eq!(ct_desc.position, ct_position);
        assert_eq!(xray_desc.position, xray_position);
        assert_eq!(xray_desc.source, source);
        assert_eq!(ct_desc.img.pixel_type(), PixelType::F64);
        assert_eq!(xray_desc.img.pixel_type(), PixelType::U16);
        assert_eq!(xray_desc.img.shape(), [2, 2]);
    }

    #[test]
    fn test_prepare_with_range_config() {
        let device = Default::default();
        let ct = Image::<Backend, 2>::from_pixels(&[0.0f32, 5.0, 10.0, 20.0], [2, 2], &device).unwrap();
        let xray = Image::<Backend, 2>::from_pixels(&[1.0f32, 2.0, 3.0, 4.0], [2, 2], &device).unwrap();
        let config = PreprocessConfig::new().with_ct_normalization(NormalizationMode::Range);

        let (ct_desc, _) = prepare_images_with(&config, &ct, &xray, "ct", "detector", "source").unwrap();
        assert_eq!(ct_desc.img.to_vec(), vec![0.0, 0.25, 0.5, 1.0]);
        assert_eq!(ct_desc.position, "ct");
    }

    #[test]
    fn test_prepare_rejects_invalid_config() {
        let device = Default::default();
        let ct = Image::<Backend, 1>::from_pixels(&[1.0f32, 2.0], [2], &device).unwrap();
        let xray = Image::<Backend, 1>::from_pixels(&[1.0f32, 2.0], [2], &device).unwrap();
        let config = PreprocessConfig::new().with_xray_window(60.0, 0.0);

        let err = prepare_images_with(&config, &ct, &xray, (), (), ()).unwrap_err();
        assert!(matches!(err, ImageError::DivideByZero(_)));
    }
}
