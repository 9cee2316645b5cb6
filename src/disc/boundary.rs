use ndarray::ArrayViewMut1;
use serde::Deserialize;

use crate::disc::stencil::HALO;

/// Fills the ghost cells `0, 1, m - 2, m - 1` that the schemes leave alone.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BoundaryCondition {
    /// Ghost cells copy the interior cells from the opposite end.
    Periodic,
    /// Fixed inflow/outflow values.
    Constant { left: f64, right: f64 },
    /// Zero-gradient extrapolation of the outermost interior cells.
    Open,
}
impl BoundaryCondition {
    pub fn apply(&self, mut u: ArrayViewMut1<f64>) {
        let m = u.len();
        debug_assert!(m > 2 * HALO);
        match self {
            BoundaryCondition::Periodic => {
                // ghosts read interior cells only, wrapped modulo the cell count
                let n = (m - 2 * HALO) as isize;
                for k in 0..HALO {
                    let left_src = HALO + (k as isize - HALO as isize).rem_euclid(n) as usize;
                    let right_src = HALO + (k as isize).rem_euclid(n) as usize;
                    u[k] = u[left_src];
                    u[m - HALO + k] = u[right_src];
                }
            }
            BoundaryCondition::Constant { left, right } => {
                for k in 0..HALO {
                    u[k] = *left;
                    u[m - HALO + k] = *right;
                }
            }
            BoundaryCondition::Open => {
                let first = u[HALO];
                let last = u[m - HALO - 1];
                for k in 0..HALO {
                    u[k] = first;
                    u[m - HALO + k] = last;
                }
            }
        }
    }
}
