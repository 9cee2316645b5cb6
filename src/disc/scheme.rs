use std::{fmt, str::FromStr};

use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use serde::Deserialize;

use crate::{
    disc::stencil::{HALO, flux_limited, linear, slope_limited},
    error::{SchemeError, SchemeResult},
};

/// Smallest grid on which every stencil stays inside the array.
pub const MIN_GRID_SIZE: usize = 2 * HALO + 1;

/// Grid and time step data shared by all schemes, fixed for a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchemeParameters {
    pub m: usize,
    pub delta_t: f64,
    pub delta_x: f64,
    /// Courant number, velocity * delta_t / delta_x.
    pub sigma: f64,
}
impl SchemeParameters {
    pub fn new(m: usize, delta_t: f64, delta_x: f64, sigma: f64) -> SchemeResult<Self> {
        if m < MIN_GRID_SIZE {
            return Err(SchemeError::InvalidGridSize { m });
        }
        if !(delta_t > 0.0 && delta_t.is_finite()) {
            return Err(SchemeError::InvalidParameter {
                name: "delta_t",
                value: delta_t,
            });
        }
        if !(delta_x > 0.0 && delta_x.is_finite()) {
            return Err(SchemeError::InvalidParameter {
                name: "delta_x",
                value: delta_x,
            });
        }
        if !sigma.is_finite() {
            return Err(SchemeError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        Ok(Self {
            m,
            delta_t,
            delta_x,
            sigma,
        })
    }
    fn check_len(&self, found: usize) -> SchemeResult<()> {
        if found != self.m {
            return Err(SchemeError::FieldLengthMismatch {
                expected: self.m,
                found,
            });
        }
        Ok(())
    }
}

/// Per-cell slopes or face fluxes of the limited schemes. Entries are
/// rewritten by every step before they are read.
#[derive(Clone, Debug)]
pub struct Scratch {
    aux: Array1<f64>,
}
impl Scratch {
    pub fn new(m: usize) -> Self {
        Self {
            aux: Array1::zeros(m),
        }
    }
    pub fn len(&self) -> usize {
        self.aux.len()
    }
    pub fn is_empty(&self) -> bool {
        self.aux.is_empty()
    }
    fn view_mut(&mut self, m: usize) -> ArrayViewMut1<'_, f64> {
        if self.aux.len() != m {
            self.aux = Array1::zeros(m);
        }
        self.aux.view_mut()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Upwind,
    LaxWendroff,
    BeamWarming,
    Fromm,
    Minmod,
    Superbee,
    Mc,
    VanLeer,
}
impl Scheme {
    pub const ALL: [Scheme; 8] = [
        Scheme::Upwind,
        Scheme::LaxWendroff,
        Scheme::BeamWarming,
        Scheme::Fromm,
        Scheme::Minmod,
        Scheme::Superbee,
        Scheme::Mc,
        Scheme::VanLeer,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Upwind => "upwind",
            Scheme::LaxWendroff => "lax_wendroff",
            Scheme::BeamWarming => "beam_warming",
            Scheme::Fromm => "fromm",
            Scheme::Minmod => "minmod",
            Scheme::Superbee => "superbee",
            Scheme::Mc => "mc",
            Scheme::VanLeer => "van_leer",
        }
    }
    /// Whether the scheme runs a slope or flux pass before the update.
    pub fn needs_scratch(&self) -> bool {
        matches!(
            self,
            Scheme::Minmod | Scheme::Superbee | Scheme::Mc | Scheme::VanLeer
        )
    }
    /// Writes the next time level of `u` into `u_new[2..m - 2]`.
    ///
    /// The two cells at each end of `u_new` are not touched; boundary
    /// conditions are the caller's job. `scratch` is reallocated if its
    /// length differs from `params.m`.
    pub fn step(
        &self,
        params: &SchemeParameters,
        u: ArrayView1<f64>,
        u_new: ArrayViewMut1<f64>,
        scratch: &mut Scratch,
    ) -> SchemeResult<()> {
        params.check_len(u.len())?;
        params.check_len(u_new.len())?;
        match self {
            Scheme::Upwind => linear::upwind(params, u, u_new),
            Scheme::LaxWendroff => linear::lax_wendroff(params, u, u_new),
            Scheme::BeamWarming => linear::beam_warming(params, u, u_new),
            Scheme::Fromm => linear::fromm(params, u, u_new),
            Scheme::Minmod => slope_limited::minmod(params, u, u_new, scratch.view_mut(params.m)),
            Scheme::Superbee => {
                slope_limited::superbee(params, u, u_new, scratch.view_mut(params.m))
            }
            Scheme::Mc => flux_limited::mc(params, u, u_new, scratch.view_mut(params.m)),
            Scheme::VanLeer => flux_limited::van_leer(params, u, u_new, scratch.view_mut(params.m)),
        }
        Ok(())
    }
}
impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl FromStr for Scheme {
    type Err = SchemeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| SchemeError::UnknownScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_parameters_reject_small_grid() {
        assert!(matches!(
            SchemeParameters::new(4, 0.5, 1.0, 0.5),
            Err(SchemeError::InvalidGridSize { m: 4 })
        ));
        assert!(SchemeParameters::new(5, 0.5, 1.0, 0.5).is_ok());
        assert!(matches!(
            SchemeParameters::new(10, 0.5, 0.0, 0.5),
            Err(SchemeError::InvalidParameter { name: "delta_x", .. })
        ));
        assert!(matches!(
            SchemeParameters::new(10, -0.1, 1.0, 0.5),
            Err(SchemeError::InvalidParameter { name: "delta_t", .. })
        ));
        assert!(SchemeParameters::new(10, 0.5, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_step_rejects_length_mismatch() {
        let params = SchemeParameters::new(8, 0.5, 1.0, 0.5).unwrap();
        let u = Array1::zeros(8);
        let mut u_new = Array1::zeros(7);
        let mut scratch = Scratch::new(8);
        let result = Scheme::Upwind.step(&params, u.view(), u_new.view_mut(), &mut scratch);
        assert!(matches!(
            result,
            Err(SchemeError::FieldLengthMismatch {
                expected: 8,
                found: 7
            })
        ));
    }

    #[test]
    fn test_scratch_resized_to_grid() {
        let params = SchemeParameters::new(9, 0.5, 1.0, 0.5).unwrap();
        let u = Array1::from_elem(9, 1.0);
        let mut u_new = Array1::zeros(9);
        let mut scratch = Scratch::new(0);
        assert!(scratch.is_empty());
        Scheme::VanLeer
            .step(&params, u.view(), u_new.view_mut(), &mut scratch)
            .unwrap();
        assert_eq!(scratch.len(), 9);
    }

    #[test]
    fn test_names_round_trip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.to_string().parse::<Scheme>().unwrap(), scheme);
        }
        assert!(matches!(
            "weno5".parse::<Scheme>(),
            Err(SchemeError::UnknownScheme(_))
        ));
        let parsed: Scheme = serde_json::from_str("\"van_leer\"").unwrap();
        assert_eq!(parsed, Scheme::VanLeer);
    }
}
