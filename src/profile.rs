//! Riemann problems on the unit domain, sampled at cell centres.

use log::debug;
use rayon::prelude::*;

use crate::{
    errors::RiemannError,
    physical_quantities::Primitives,
    riemann_solver::{ExactRiemannSolver, StarState},
};

/// Density, velocity and pressure on `N >= 2` equal cells covering `[0, 1]`.
#[allow(clippy::len_without_is_empty)]
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    density: Vec<f64>,
    velocity: Vec<f64>,
    pressure: Vec<f64>,
}

impl Profile {
    pub fn new(
        density: Vec<f64>,
        velocity: Vec<f64>,
        pressure: Vec<f64>,
    ) -> Result<Self, RiemannError> {
        if density.len() != velocity.len() || density.len() != pressure.len() {
            return Err(RiemannError::MismatchedLengths {
                density: density.len(),
                velocity: velocity.len(),
                pressure: pressure.len(),
            });
        }
        if density.len() < 2 {
            return Err(RiemannError::DomainTooSmall(density.len()));
        }
        Ok(Self {
            density,
            velocity,
            pressure,
        })
    }

    /// `left` on the first `num_cells / 2` cells, `right` on the others.
    pub fn two_state(
        num_cells: usize,
        left: Primitives,
        right: Primitives,
    ) -> Result<Self, RiemannError> {
        let half = num_cells / 2;
        let state = |idx: usize| if idx < half { left } else { right };
        Self::from_fn(num_cells, state)
    }

    fn from_fn<F: Fn(usize) -> Primitives>(
        num_cells: usize,
        state: F,
    ) -> Result<Self, RiemannError> {
        let states = (0..num_cells).map(state).collect::<Vec<_>>();
        Self::new(
            states.iter().map(|s| s.density()).collect(),
            states.iter().map(|s| s.velocity()).collect(),
            states.iter().map(|s| s.pressure()).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn dx(&self) -> f64 {
        1. / self.len() as f64
    }

    pub fn cell_center(&self, idx: usize) -> f64 {
        (idx as f64 + 0.5) * self.dx()
    }

    /// Index of the first cell right of the discontinuity, unless specified otherwise.
    pub fn default_split(&self) -> usize {
        self.len() / 2
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    pub fn state(&self, idx: usize) -> Primitives {
        Primitives::new(self.density[idx], self.velocity[idx], self.pressure[idx])
    }
}

/// A [`Profile`] sampled from the exact solution, with the star state it was
/// computed from (absent for vacuum solutions and at `t = 0`).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSolution {
    pub profile: Profile,
    pub star: Option<StarState>,
}

impl ExactRiemannSolver {
    /// Evolve the Riemann problem contained in `profile` to time `t`.
    ///
    /// The discontinuity lies between cells `N / 2 - 1` and `N / 2`.
    pub fn solve_profile(
        &self,
        profile: &Profile,
        t: f64,
    ) -> Result<ProfileSolution, RiemannError> {
        self.solve_profile_split(profile, profile.default_split(), t)
    }

    /// Evolve the Riemann problem contained in `profile` to time `t`, with the
    /// discontinuity between cells `split - 1` and `split`.
    ///
    /// At `t = 0` the input is returned unchanged.
    pub fn solve_profile_split(
        &self,
        profile: &Profile,
        split: usize,
        t: f64,
    ) -> Result<ProfileSolution, RiemannError> {
        if !(t.is_finite() && t >= 0.) {
            return Err(RiemannError::InvalidTime(t));
        }
        if split == 0 || split >= profile.len() {
            return Err(RiemannError::SplitOutOfBounds {
                split,
                num_cells: profile.len(),
            });
        }
        if t == 0. {
            return Ok(ProfileSolution {
                profile: profile.clone(),
                star: None,
            });
        }

        let left = profile.state(split - 1);
        let right = profile.state(split);
        let solution = self.solve(&left, &right)?;
        debug!("Sampling solution on {} cells at t = {}", profile.len(), t);

        let center = split as f64 * profile.dx();
        let states = (0..profile.len())
            .into_par_iter()
            .map(|idx| solution.sample((profile.cell_center(idx) - center) / t))
            .collect::<Vec<_>>();

        Ok(ProfileSolution {
            profile: Profile {
                density: states.iter().map(|s| s.density()).collect(),
                velocity: states.iter().map(|s| s.velocity()).collect(),
                pressure: states.iter().map(|s| s.pressure()).collect(),
            },
            star: solution.star_state().copied(),
        })
    }
}
