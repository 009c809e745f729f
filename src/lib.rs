//! Exact Riemann solver for the one dimensional Euler equations of an ideal gas.
//!
//! Given two uniform gas states separated by a discontinuity, the crate computes the
//! exact self-similar solution and samples it at arbitrary space-time points. This is
//! mostly useful to validate numerical hydrodynamics schemes against.
//!
//! ```
//! use exact_riemann::{EquationOfState, ExactRiemannSolver, Primitives};
//!
//! let solver = ExactRiemannSolver::new(EquationOfState::new(1.4).unwrap());
//! let solution = solver
//!     .solve(&Primitives::new(1., 0., 1.), &Primitives::new(0.125, 0., 0.1))
//!     .unwrap();
//! let star = solution.star_state().unwrap();
//! assert!(star.converged);
//! assert!((star.pressure - 0.30313).abs() < 1e-5);
//! ```

pub use errors::{ConfigError, RiemannError};
pub use gas_law::{AdiabaticIndex, EquationOfState};
pub use physical_quantities::Primitives;
pub use profile::{Profile, ProfileSolution};
pub use riemann_solver::{ExactRiemannSolver, RiemannSolution, StarState, WaveRegion};

pub mod config;
mod errors;
pub mod gas_law;
pub mod physical_quantities;
pub mod profile;
pub mod riemann_solver;
