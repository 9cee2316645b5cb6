use std::f64::consts::PI;

use ndarray::Array1;
use serde::Deserialize;

use crate::{
    disc::{boundary::BoundaryCondition, mesh::mesh1d::Mesh1d},
    error::SchemeResult,
    io::param_parser::SolverParamParser,
    solver::{Solver, SolverParameters},
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum InitialCondition {
    /// Riemann problem: `left` for x < position, `right` otherwise.
    Step { position: f64, left: f64, right: f64 },
    /// `high` on [start, end), `low` elsewhere.
    Square {
        start: f64,
        end: f64,
        low: f64,
        high: f64,
    },
    /// offset + amplitude * sin(2 pi wavenumber x)
    Sine {
        wavenumber: f64,
        amplitude: f64,
        #[serde(default)]
        offset: f64,
    },
    Gaussian {
        center: f64,
        width: f64,
        amplitude: f64,
    },
}
impl InitialCondition {
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            InitialCondition::Step {
                position,
                left,
                right,
            } => {
                if x < position {
                    left
                } else {
                    right
                }
            }
            InitialCondition::Square {
                start,
                end,
                low,
                high,
            } => {
                if x >= start && x < end {
                    high
                } else {
                    low
                }
            }
            InitialCondition::Sine {
                wavenumber,
                amplitude,
                offset,
            } => offset + amplitude * (2.0 * PI * wavenumber * x).sin(),
            InitialCondition::Gaussian {
                center,
                width,
                amplitude,
            } => amplitude * (-((x - center) / width).powi(2)).exp(),
        }
    }
}

pub fn initialize_mesh1d(
    cell_num: usize,
    left_coord: f64,
    right_coord: f64,
) -> SchemeResult<Mesh1d> {
    Mesh1d::new(cell_num, left_coord, right_coord)
}

/// Samples the initial condition at every cell center, then fills the
/// ghost cells.
pub fn initialize_solution(
    mesh: &Mesh1d,
    initial_condition: &InitialCondition,
    boundary: &BoundaryCondition,
) -> Array1<f64> {
    let mut solution = mesh.x.mapv(|x| initial_condition.evaluate(x));
    boundary.apply(solution.view_mut());
    solution
}

pub fn initialize_params_by_file(file_path: &str) -> SchemeResult<SolverParamParser> {
    SolverParamParser::parse(file_path)
}

pub fn initialize_solver(param: &SolverParamParser) -> SchemeResult<Solver> {
    let mesh = initialize_mesh1d(param.cell_num, param.left_coord, param.right_coord)?;
    let solver_params = SolverParameters {
        cfl: param.cfl,
        final_time: param.final_time,
        final_step: param.final_step,
        velocity: param.velocity,
    };
    let solution = initialize_solution(&mesh, &param.initial_condition, &param.boundary);
    Solver::new(
        param.scheme,
        mesh,
        solver_params,
        param.boundary.clone(),
        solution,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_square() {
        let step = InitialCondition::Step {
            position: 0.5,
            left: 1.0,
            right: 0.0,
        };
        assert_eq!(step.evaluate(0.25), 1.0);
        assert_eq!(step.evaluate(0.5), 0.0);
        let square = InitialCondition::Square {
            start: 0.2,
            end: 0.4,
            low: 0.0,
            high: 2.0,
        };
        assert_eq!(square.evaluate(0.3), 2.0);
        assert_eq!(square.evaluate(0.4), 0.0);
    }

    #[test]
    fn test_initial_solution_fills_ghosts() {
        let mesh = initialize_mesh1d(8, 0.0, 1.0).unwrap();
        let ic = InitialCondition::Sine {
            wavenumber: 1.0,
            amplitude: 1.0,
            offset: 0.0,
        };
        let u = initialize_solution(&mesh, &ic, &BoundaryCondition::Periodic);
        assert_eq!(u.len(), 12);
        assert_eq!(u[0], u[8]);
        assert_eq!(u[11], u[3]);
        assert!((u[2] - (PI / 8.0).sin()).abs() < 1e-14);
    }
}
