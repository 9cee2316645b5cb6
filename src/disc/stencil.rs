//! Per-cell update kernels.
//!
//! Every kernel reads the old field `u` and writes `u_new[i]` for
//! `i` in `2..m - 2`. The two cells at each end are left to the caller.
//! Kernels index the arrays directly and panic if they are shorter than
//! `params.m`; [`Scheme::step`](crate::disc::scheme::Scheme::step) checks
//! the lengths before dispatching here.
pub mod flux_limited;
pub mod linear;
pub mod slope_limited;

/// Stencil half width: cells `0..HALO` and `m - HALO..m` are not updated.
pub const HALO: usize = 2;
