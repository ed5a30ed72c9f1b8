//! Homogeneous coordinates for point sets.
//!
//! Point sets are `[count, dim]` tensors with one point per row. Appending a
//! column of ones lets affine transforms act on them through a single matrix
//! product.

use burn::tensor::backend::Backend;
use burn::tensor::{Shape, Tensor, TensorData};
use r3d2d_core::image::generate_grid;
use r3d2d_core::{ImageError, Point, Result};

/// Append a column of ones to a `[count, dim]` point set.
///
/// Returns a `[count, dim + 1]` tensor whose first `dim` columns equal the input.
/// Empty point sets are valid: `[0, dim]` gives `[0, dim + 1]` and `[count, 0]`
/// gives a `[count, 1]` column of ones.
pub fn add_homog_coord<B: Backend>(points: Tensor<B, 2>) -> Tensor<B, 2> {
    let [count, _] = points.dims();
    let ones = Tensor::<B, 2>::ones([count, 1], &points.device());
    Tensor::cat(vec![points, ones], 1)
}

/// [`add_homog_coord`] for a row-major buffer with a runtime shape.
///
/// # Errors
/// * `InvalidShape` when `shape` does not have exactly two axes
/// * `ShapeMismatch` when `values.len()` differs from `shape[0] * shape[1]`
pub fn add_homog_coord_raw<B: Backend>(
    values: &[f64],
    shape: &[usize],
    device: &B::Device,
) -> Result<Tensor<B, 2>> {
    let &[count, dim] = shape else {
        return Err(ImageError::invalid_shape(format!(
            "points must be a 2-D array, got {} axes",
            shape.len()
        )));
    };
    if values.len() != count * dim {
        return Err(ImageError::ShapeMismatch {
            expected: shape.to_vec(),
            actual: vec![values.len()],
        });
    }

    let data = TensorData::new(values.to_vec(), Shape::new([count, dim])).convert::<B::FloatElem>();
    Ok(add_homog_coord(Tensor::from_data(data, device)))
}

/// Build the homogeneous `[count, D + 1]` point set of a list of positions.
///
/// An empty list gives a `[0, D + 1]` tensor.
pub fn homogeneous_points<B: Backend, const D: usize>(
    points: &[Point<D>],
    device: &B::Device,
) -> Result<Tensor<B, 2>> {
    let coords: Vec<f64> = points.iter().flat_map(|p| p.to_vec()).collect();
    add_homog_coord_raw(&coords, &[points.len(), D], device)
}

/// Index grid of an image with a trailing homogeneous coordinate.
///
/// Returns `[N, D + 1]` rows `(x, y, ..., 1)` in storage order.
pub fn homogeneous_grid<B: Backend, const D: usize>(
    shape: [usize; D],
    device: &B::Device,
) -> Result<Tensor<B, 2>> {
    let grid = generate_grid::<B, D>(shape, device)?;
    tracing::debug!("Homogeneous grid for shape {:?}: {} points", shape, grid.dims()[0]);
    Ok(add_homog_coord(grid))
}
