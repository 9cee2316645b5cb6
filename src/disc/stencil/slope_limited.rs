use ndarray::{ArrayView1, ArrayViewMut1};

use crate::disc::{
    limiter::{minmod_slope, superbee_slope},
    scheme::SchemeParameters,
    stencil::HALO,
};

/// Fills `slope[i]` for `i` in `1..m - 2` from the divided differences
/// around each cell.
pub fn compute_slopes(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    mut slope: ArrayViewMut1<f64>,
    limiter: fn(f64, f64) -> f64,
) {
    let dx = params.delta_x;
    for i in 1..params.m - HALO {
        let backward = (u[i] - u[i - 1]) / dx;
        let forward = (u[i + 1] - u[i]) / dx;
        slope[i] = limiter(backward, forward);
    }
}

/// Upwind update corrected by the jump of the limited slopes.
pub fn apply_slopes(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    slope: ArrayView1<f64>,
    mut u_new: ArrayViewMut1<f64>,
) {
    let sigma = params.sigma;
    let dx = params.delta_x;
    let dt = params.delta_t;
    for i in HALO..params.m - HALO {
        u_new[i] = u[i]
            - sigma * (u[i] - u[i - 1])
            - sigma / 2.0 * (slope[i] - slope[i - 1]) * (dx - dt);
    }
}

pub fn minmod(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    u_new: ArrayViewMut1<f64>,
    mut slope: ArrayViewMut1<f64>,
) {
    compute_slopes(params, u, slope.view_mut(), minmod_slope);
    apply_slopes(params, u, slope.view(), u_new);
}

pub fn superbee(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    u_new: ArrayViewMut1<f64>,
    mut slope: ArrayViewMut1<f64>,
) {
    compute_slopes(params, u, slope.view_mut(), superbee_slope);
    apply_slopes(params, u, slope.view(), u_new);
}
