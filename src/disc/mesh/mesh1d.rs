use ndarray::Array1;

use crate::{
    disc::stencil::HALO,
    error::{SchemeError, SchemeResult},
};

/// Uniform cell-centered grid on `[left_coord, right_coord]` padded with
/// `HALO` ghost cells on each side.
#[derive(Clone, Debug)]
pub struct Mesh1d {
    pub cell_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
    pub delta_x: f64,
    /// Cell centers, ghost cells included.
    pub x: Array1<f64>,
}
impl Mesh1d {
    pub fn new(cell_num: usize, left_coord: f64, right_coord: f64) -> SchemeResult<Self> {
        if cell_num == 0 {
            return Err(SchemeError::InvalidGridSize { m: 2 * HALO });
        }
        let length = right_coord - left_coord;
        if !(length > 0.0 && length.is_finite()) {
            return Err(SchemeError::InvalidParameter {
                name: "right_coord",
                value: right_coord,
            });
        }
        let delta_x = length / cell_num as f64;
        let node_num = cell_num + 2 * HALO;
        let x = Array1::from_shape_fn(node_num, |i| {
            left_coord + (i as f64 - HALO as f64 + 0.5) * delta_x
        });
        Ok(Self {
            cell_num,
            left_coord,
            right_coord,
            delta_x,
            x,
        })
    }
    /// Total number of points, M.
    pub fn node_num(&self) -> usize {
        self.x.len()
    }
    /// Index range of the physical cells.
    pub fn interior(&self) -> std::ops::Range<usize> {
        HALO..self.node_num() - HALO
    }
}
