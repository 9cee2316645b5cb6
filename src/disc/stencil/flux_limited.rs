use ndarray::{ArrayView1, ArrayViewMut1};

use crate::disc::{
    limiter::{self, smoothness_ratio},
    scheme::SchemeParameters,
    stencil::HALO,
};

/// Fills `flux[i]`, the limited flux through the face at `i - 1/2`,
/// for `i` in `2..m - 1`.
pub fn compute_fluxes(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    mut flux: ArrayViewMut1<f64>,
    phi: fn(f64) -> f64,
) {
    let sigma = params.sigma;
    for i in HALO..params.m - 1 {
        let r = smoothness_ratio(u[i - 2], u[i - 1], u[i]);
        flux[i] = u[i - 1] + 0.5 * (1.0 - sigma) * (u[i] - u[i - 1]) * phi(r);
    }
}

/// Conservative update from the face fluxes.
pub fn apply_fluxes(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    flux: ArrayView1<f64>,
    mut u_new: ArrayViewMut1<f64>,
) {
    let sigma = params.sigma;
    for i in HALO..params.m - HALO {
        u_new[i] = u[i] - sigma * (flux[i + 1] - flux[i]);
    }
}

pub fn mc(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    u_new: ArrayViewMut1<f64>,
    mut flux: ArrayViewMut1<f64>,
) {
    compute_fluxes(params, u, flux.view_mut(), limiter::mc);
    apply_fluxes(params, u, flux.view(), u_new);
}

pub fn van_leer(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    u_new: ArrayViewMut1<f64>,
    mut flux: ArrayViewMut1<f64>,
) {
    compute_fluxes(params, u, flux.view_mut(), limiter::van_leer);
    apply_fluxes(params, u, flux.view(), u_new);
}
