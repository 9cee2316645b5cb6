//! Explicit one-step update schemes for the 1-D linear advection equation
//! on a uniform grid, with a small time-marching driver around them.
//!
//! The core is [`disc::scheme::Scheme`]: each variant reads the old field and
//! writes the interior of a caller-owned output buffer. Ghost cells are filled
//! by [`disc::boundary::BoundaryCondition`] in the driver.
pub mod disc;
pub mod error;
pub mod initialization;
pub mod io;
pub mod solver;
