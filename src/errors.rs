use std::{error::Error, fmt::Display};

/// Errors raised before a Riemann problem is solved.
///
/// These are violations of the caller's contract. A Newton iteration that
/// does not converge is *not* an error, see [`crate::riemann_solver::StarState`].
#[derive(Debug, Clone, PartialEq)]
pub enum RiemannError {
    NegativeDensity(f64),
    NegativePressure(f64),
    NonFiniteState,
    InvalidAdiabaticIndex(f64),
    InvalidTime(f64),
    MismatchedLengths {
        density: usize,
        velocity: usize,
        pressure: usize,
    },
    DomainTooSmall(usize),
    SplitOutOfBounds {
        split: usize,
        num_cells: usize,
    },
}

impl Display for RiemannError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiemannError::NegativeDensity(rho) => write!(f, "Negative mass density: {}", rho),
            RiemannError::NegativePressure(p) => write!(f, "Negative gas pressure: {}", p),
            RiemannError::NonFiniteState => write!(f, "Gas state contains NaN or infinite values"),
            RiemannError::InvalidAdiabaticIndex(gamma) => {
                write!(f, "Adiabatic index must be finite and > 1, got: {gamma}")
            }
            RiemannError::InvalidTime(t) => {
                write!(f, "Sample time must be finite and >= 0, got: {t}")
            }
            RiemannError::MismatchedLengths {
                density,
                velocity,
                pressure,
            } => write!(
                f,
                "Profile arrays differ in length: density {}, velocity {}, pressure {}",
                density, velocity, pressure
            ),
            RiemannError::DomainTooSmall(n) => {
                write!(f, "A Riemann problem needs at least 2 cells, got {}", n)
            }
            RiemannError::SplitOutOfBounds { split, num_cells } => write!(
                f,
                "Discontinuity index {} must lie in 1..{} for a domain of {} cells",
                split, num_cells, num_cells
            ),
        }
    }
}

impl Error for RiemannError {}

#[derive(Debug)]
pub enum ConfigError {
    MissingParameter(String),
    InvalidValue(String),
    InvalidArrayLength(usize, usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingParameter(name) => {
                write!(f, "Missing required parameter in configuration: {}", name)
            }
            ConfigError::InvalidValue(name) => {
                write!(f, "Invalid value for configuration parameter: {}", name)
            }
            ConfigError::InvalidArrayLength(a, b) => {
                write!(f, "Expected array of length {}, but found {}", a, b)
            }
        }
    }
}

impl Error for ConfigError {}
