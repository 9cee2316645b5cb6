use ndarray::{ArrayView1, ArrayViewMut1};

use crate::disc::{scheme::SchemeParameters, stencil::HALO};

pub fn upwind(params: &SchemeParameters, u: ArrayView1<f64>, mut u_new: ArrayViewMut1<f64>) {
    let sigma = params.sigma;
    for i in HALO..params.m - HALO {
        u_new[i] = u[i] - sigma * (u[i] - u[i - 1]);
    }
}

pub fn lax_wendroff(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    mut u_new: ArrayViewMut1<f64>,
) {
    let sigma = params.sigma;
    for i in HALO..params.m - HALO {
        u_new[i] = u[i] - sigma / 2.0 * (u[i + 1] - u[i - 1])
            + sigma.powi(2) / 2.0 * (u[i + 1] - 2.0 * u[i] + u[i - 1]);
    }
}

/// Upwind plus a one-sided second difference correction.
pub fn beam_warming(
    params: &SchemeParameters,
    u: ArrayView1<f64>,
    mut u_new: ArrayViewMut1<f64>,
) {
    let sigma = params.sigma;
    let dx = params.delta_x;
    let dt = params.delta_t;
    for i in HALO..params.m - HALO {
        let curvature = (u[i] - 2.0 * u[i - 1] + u[i - 2]) / dx;
        u_new[i] = u[i] - sigma * (u[i] - u[i - 1]) - sigma / 2.0 * curvature * (dx - dt);
    }
}

/// Upwind corrected by the difference of the centered slopes at `i` and `i - 1`.
pub fn fromm(params: &SchemeParameters, u: ArrayView1<f64>, mut u_new: ArrayViewMut1<f64>) {
    let sigma = params.sigma;
    let dx = params.delta_x;
    let dt = params.delta_t;
    for i in HALO..params.m - HALO {
        let slope_i = (u[i + 1] - u[i - 1]) / (2.0 * dx);
        let slope_im1 = (u[i] - u[i - 2]) / (2.0 * dx);
        u_new[i] = u[i]
            - sigma * (u[i] - u[i - 1])
            - sigma / 2.0 * (slope_i - slope_im1) * (dx - dt);
    }
}
