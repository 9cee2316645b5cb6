/// Offset added to the denominator of the smoothness ratio so that a flat
/// downwind difference does not divide by zero.
pub const RATIO_EPSILON: f64 = 1E-16;

/// Same sign: the value with the smaller magnitude. Otherwise zero.
/// When both magnitudes are equal the second argument is returned.
pub fn minmod(a: f64, b: f64) -> f64 {
    if a * b > 0.0 {
        if a.abs() < b.abs() { a } else { b }
    } else {
        0.0
    }
}

/// Same sign: the value with the larger magnitude. Otherwise zero.
pub fn maxmod(a: f64, b: f64) -> f64 {
    if a * b > 0.0 {
        if a.abs() < b.abs() { b } else { a }
    } else {
        0.0
    }
}

/// Limited slope from the backward and forward divided differences.
pub fn minmod_slope(backward: f64, forward: f64) -> f64 {
    minmod(backward, forward)
}

/// Superbee slope: maxmod of minmod(forward, 2 backward) and
/// minmod(2 forward, backward). Zero at extrema.
pub fn superbee_slope(backward: f64, forward: f64) -> f64 {
    if forward * backward <= 0.0 {
        return 0.0;
    }
    let s1 = minmod(forward, 2.0 * backward);
    let s2 = minmod(2.0 * forward, backward);
    maxmod(s1, s2)
}

/// Ratio of consecutive differences at the face between `u_im1` and `u_i`.
pub fn smoothness_ratio(u_im2: f64, u_im1: f64, u_i: f64) -> f64 {
    (u_im1 - u_im2) / (u_i - u_im1 + RATIO_EPSILON)
}

/// Monotonized central limiter.
pub fn mc(r: f64) -> f64 {
    if r.is_nan() {
        return 0.0;
    }
    0.0_f64.max(((1.0 + r) / 2.0).min(2.0).min(2.0 * r))
}

/// Van Leer limiter, 2 in the limit r -> inf.
pub fn van_leer(r: f64) -> f64 {
    if r.is_nan() {
        return 0.0;
    }
    if r.is_infinite() {
        return if r > 0.0 { 2.0 } else { 0.0 };
    }
    (r + r.abs()) / (1.0 + r.abs())
}
