use log::{debug, info, warn};
use ndarray::Array1;

use crate::{
    disc::{
        boundary::BoundaryCondition,
        diagnostics::{field_bounds, total_variation},
        mesh::mesh1d::Mesh1d,
        scheme::{Scheme, SchemeParameters, Scratch},
    },
    error::{SchemeError, SchemeResult},
};

/// Slack on the final time so that round-off in the accumulated time does
/// not drop the last step.
const TIME_TOLERANCE: f64 = 1e-12;

#[derive(Clone, Copy, Debug)]
pub struct SolverParameters {
    pub cfl: f64,
    pub final_time: f64,
    pub final_step: usize,
    /// Advection speed, must be positive.
    pub velocity: f64,
}
impl SolverParameters {
    pub fn scheme_parameters(&self, mesh: &Mesh1d) -> SchemeResult<SchemeParameters> {
        if !(self.velocity > 0.0 && self.velocity.is_finite()) {
            return Err(SchemeError::InvalidParameter {
                name: "velocity",
                value: self.velocity,
            });
        }
        if !(self.cfl > 0.0) {
            return Err(SchemeError::InvalidParameter {
                name: "cfl",
                value: self.cfl,
            });
        }
        if self.cfl > 1.0 {
            warn!("cfl = {} exceeds the stability limit of the explicit schemes", self.cfl);
        }
        let delta_t = self.cfl * mesh.delta_x / self.velocity;
        SchemeParameters::new(mesh.node_num(), delta_t, mesh.delta_x, self.cfl)
    }
}

/// Time-marching driver. Owns the current and next field buffers, fills
/// ghost cells and hands each step to the selected scheme.
pub struct Solver {
    pub solution: Array1<f64>,
    next_solution: Array1<f64>,
    scratch: Scratch,
    pub scheme: Scheme,
    pub mesh: Mesh1d,
    pub boundary: BoundaryCondition,
    pub scheme_params: SchemeParameters,
    pub solver_params: SolverParameters,
    pub curr_time: f64,
    pub curr_step: usize,
}
impl Solver {
    pub fn new(
        scheme: Scheme,
        mesh: Mesh1d,
        solver_params: SolverParameters,
        boundary: BoundaryCondition,
        solution: Array1<f64>,
    ) -> SchemeResult<Self> {
        let scheme_params = solver_params.scheme_parameters(&mesh)?;
        if solution.len() != scheme_params.m {
            return Err(SchemeError::FieldLengthMismatch {
                expected: scheme_params.m,
                found: solution.len(),
            });
        }
        let next_solution = solution.clone();
        let scratch = Scratch::new(if scheme.needs_scratch() {
            scheme_params.m
        } else {
            0
        });
        Ok(Self {
            solution,
            next_solution,
            scratch,
            scheme,
            mesh,
            boundary,
            scheme_params,
            solver_params,
            curr_time: 0.0,
            curr_step: 0,
        })
    }
    /// Advances one time level and fills the ghost cells of the result.
    pub fn advance(&mut self) -> SchemeResult<()> {
        self.scheme.step(
            &self.scheme_params,
            self.solution.view(),
            self.next_solution.view_mut(),
            &mut self.scratch,
        )?;
        self.boundary.apply(self.next_solution.view_mut());
        std::mem::swap(&mut self.solution, &mut self.next_solution);
        self.curr_step += 1;
        self.curr_time += self.scheme_params.delta_t;
        if self.solution.iter().any(|v| !v.is_finite()) {
            return Err(SchemeError::NonFiniteSolution {
                step: self.curr_step,
            });
        }
        Ok(())
    }
    pub fn solve(&mut self) -> SchemeResult<()> {
        let delta_t = self.scheme_params.delta_t;
        info!(
            "scheme = {}, M = {}, dx = {:.3e}, dt = {:.3e}, sigma = {}",
            self.scheme,
            self.scheme_params.m,
            self.scheme_params.delta_x,
            delta_t,
            self.scheme_params.sigma
        );
        self.boundary.apply(self.solution.view_mut());
        let initial_tv = total_variation(self.solution.view());
        while self.curr_step < self.solver_params.final_step
            && self.curr_time + delta_t <= self.solver_params.final_time + TIME_TOLERANCE
        {
            self.advance()?;
            debug!(
                "step {}: t = {:.6}, tv = {:.6e}",
                self.curr_step,
                self.curr_time,
                total_variation(self.solution.view())
            );
        }
        if self.curr_step < self.solver_params.final_step
            && self.curr_time + TIME_TOLERANCE < self.solver_params.final_time
        {
            warn!(
                "final_time {} is not a multiple of dt = {:e}, stopped at t = {}",
                self.solver_params.final_time, delta_t, self.curr_time
            );
        }
        let (min, max) = field_bounds(self.solution.view())?;
        info!(
            "finished: steps = {}, t = {:.6}, min = {:.6}, max = {:.6}, tv {:.6e} -> {:.6e}",
            self.curr_step,
            self.curr_time,
            min,
            max,
            initial_tv,
            total_variation(self.solution.view())
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::{InitialCondition, initialize_solution};

    fn build(scheme: Scheme, final_step: usize, final_time: f64) -> Solver {
        let mesh = Mesh1d::new(20, 0.0, 1.0).unwrap();
        let ic = InitialCondition::Square {
            start: 0.2,
            end: 0.5,
            low: 0.0,
            high: 1.0,
        };
        let bc = BoundaryCondition::Periodic;
        let solution = initialize_solution(&mesh, &ic, &bc);
        let params = SolverParameters {
            cfl: 0.5,
            final_time,
            final_step,
            velocity: 2.0,
        };
        Solver::new(scheme, mesh, params, bc, solution).unwrap()
    }

    #[test]
    fn test_time_step_from_cfl() {
        let solver = build(Scheme::Upwind, 10, 1.0);
        assert!((solver.scheme_params.delta_t - 0.0125).abs() < 1e-15);
        assert_eq!(solver.scheme_params.sigma, 0.5);
        assert_eq!(solver.scheme_params.m, 24);
    }

    #[test]
    fn test_stops_at_final_step() {
        let mut solver = build(Scheme::Mc, 7, 10.0);
        solver.solve().unwrap();
        assert_eq!(solver.curr_step, 7);
    }

    #[test]
    fn test_stops_at_final_time() {
        let mut solver = build(Scheme::Minmod, 1000, 0.25);
        solver.solve().unwrap();
        assert_eq!(solver.curr_step, 20);
        assert!((solver.curr_time - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_periodic_upwind_conserves_mass() {
        let mut solver = build(Scheme::Upwind, 40, 10.0);
        let mass0: f64 = solver.solution.slice(ndarray::s![2..22]).sum();
        solver.solve().unwrap();
        let mass1: f64 = solver.solution.slice(ndarray::s![2..22]).sum();
        assert!((mass0 - mass1).abs() < 1e-12);
    }

    #[test]
    fn test_unstable_run_is_reported() {
        let mesh = Mesh1d::new(20, 0.0, 1.0).unwrap();
        let ic = InitialCondition::Sine {
            wavenumber: 3.0,
            amplitude: 1.0,
            offset: 0.0,
        };
        let bc = BoundaryCondition::Periodic;
        let solution = initialize_solution(&mesh, &ic, &bc);
        let params = SolverParameters {
            cfl: 3.0,
            final_time: 1.0e9,
            final_step: 100_000,
            velocity: 1.0,
        };
        let mut solver = Solver::new(Scheme::Upwind, mesh, params, bc, solution).unwrap();
        assert!(matches!(
            solver.solve(),
            Err(SchemeError::NonFiniteSolution { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_velocity() {
        let mesh = Mesh1d::new(20, 0.0, 1.0).unwrap();
        let params = SolverParameters {
            cfl: 0.5,
            final_time: 1.0,
            final_step: 1,
            velocity: -1.0,
        };
        let result = Solver::new(
            Scheme::Upwind,
            mesh,
            params,
            BoundaryCondition::Open,
            Array1::zeros(24),
        );
        assert!(matches!(
            result,
            Err(SchemeError::InvalidParameter {
                name: "velocity",
                ..
            })
        ));
    }
}
