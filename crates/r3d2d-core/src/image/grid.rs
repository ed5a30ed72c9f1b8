use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};

use crate::error::{ImageError, Result};

/// Generate a grid of continuous indices for the given image shape.
///
/// Returns a tensor of shape `[N, D]` where N is the total number of samples
/// and D is the dimensionality. Each row lists the index of one sample with
/// the fastest-varying axis first, i.e. `(x, y, z)` for a `[D, H, W]` volume.
/// Rows follow the row-major storage order of the image.
///
/// # Arguments
/// * `shape` - The image shape `[D0, D1, ...]`
/// * `device` - The device to create the tensor on
///
/// # Errors
/// `InvalidShape` for a zero-dimensional shape, `EmptyImage` when an extent is zero.
pub fn generate_grid<B, const D: usize>(
    shape: [usize; D],
    device: &B::Device,
) -> Result<Tensor<B, 2>>
where
    B: Backend,
{
    if D == 0 {
        return Err(ImageError::invalid_shape("grid requires at least one axis"));
    }
    let total: usize = shape.iter().product();
    if total == 0 {
        return Err(ImageError::EmptyImage);
    }

    let mut grid = Vec::with_capacity(total * D);
    let mut index = [0usize; D];
    for _ in 0..total {
        for axis in (0..D).rev() {
            grid.push(index[axis] as f32);
        }
        // Advance the row-major counter, last axis fastest.
        for axis in (0..D).rev() {
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }

    let data = TensorData::new(grid, Shape::new([total * D])).convert::<B::FloatElem>();
    Ok(Tensor::<B, 1>::from_data(data, device).reshape([total, D]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type Backend = NdArray<f32>;

    #[test]
    fn test_grid_2d_order() {
        let device = Default::default();
        let grid = generate_grid::<Backend, 2>([2, 3], &device).unwrap();
        assert_eq!(grid.dims(), [6, 2]);

        let values: Vec<f32> = grid.into_data().to_vec().unwrap();
        assert_eq!(
            values,
            vec![
                0.0, 0.0, 1.0, 0.0, 2.0, 0.0, //
                0.0, 1.0, 1.0, 1.0, 2.0, 1.0,
            ]
        );
    }

    #[test]
    fn test_grid_3d_last_row() {
        let device = Default::default();
        let grid = generate_grid::<Backend, 3>([2, 3, 4], &device).unwrap();
        assert_eq!(grid.dims(), [24, 3]);

        let values: Vec<f32> = grid.into_data().to_vec().unwrap();
        assert_eq!(&values[69..72], &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_grid_empty_shape() {
        let device = Default::default();
        let err = generate_grid::<Backend, 2>([0, 3], &device).unwrap_err();
        assert_eq!(err, ImageError::EmptyImage);
    }
}
