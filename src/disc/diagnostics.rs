use ndarray::{ArrayView1, Zip, s};
use ndarray_stats::QuantileExt;

use crate::error::SchemeResult;

/// Sum of |u[i+1] - u[i]| over the whole field.
pub fn total_variation(u: ArrayView1<f64>) -> f64 {
    u.windows(2).into_iter().map(|w| (w[1] - w[0]).abs()).sum()
}

/// Smallest and largest value. Fails on an empty field or on NaN.
pub fn field_bounds(u: ArrayView1<f64>) -> SchemeResult<(f64, f64)> {
    Ok((*u.min()?, *u.max()?))
}

/// Discrete L1 norm of `u - reference` over `range`.
pub fn l1_error(
    u: ArrayView1<f64>,
    reference: ArrayView1<f64>,
    range: std::ops::Range<usize>,
    delta_x: f64,
) -> f64 {
    let u = u.slice(s![range.clone()]);
    let reference = reference.slice(s![range]);
    Zip::from(&u)
        .and(&reference)
        .fold(0.0_f64, |acc, a, b| acc + (a - b).abs())
        * delta_x
}

/// Largest |u - reference| over `range`.
pub fn max_error(
    u: ArrayView1<f64>,
    reference: ArrayView1<f64>,
    range: std::ops::Range<usize>,
) -> f64 {
    let u = u.slice(s![range.clone()]);
    let reference = reference.slice(s![range]);
    Zip::from(&u)
        .and(&reference)
        .fold(0.0_f64, |acc, a, b| acc.max((a - b).abs()))
}
