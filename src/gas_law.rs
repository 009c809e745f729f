use crate::errors::RiemannError;

/// The adiabatic index and the combinations of it that the exact solver needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdiabaticIndex {
    gamma: f64,
    gamma_inv: f64,
    odgm1: f64,
    odgp1: f64,
}

impl From<f64> for AdiabaticIndex {
    fn from(value: f64) -> Self {
        AdiabaticIndex {
            gamma: value,
            gamma_inv: 1. / value,
            odgm1: 1. / (value - 1.),
            odgp1: 1. / (value + 1.),
        }
    }
}

impl From<AdiabaticIndex> for f64 {
    fn from(value: AdiabaticIndex) -> Self {
        value.gamma
    }
}

impl AdiabaticIndex {
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn gamma_inv(&self) -> f64 {
        self.gamma_inv
    }

    pub fn gp1(&self) -> f64 {
        self.gamma + 1.
    }

    pub fn gm1(&self) -> f64 {
        self.gamma - 1.
    }

    /// (gamma - 1) / 2
    pub fn hgm1(&self) -> f64 {
        0.5 * (self.gamma - 1.)
    }

    /// (gamma + 1) / (2 gamma)
    pub fn hgp1dg(&self) -> f64 {
        0.5 * (self.gamma + 1.) * self.gamma_inv
    }

    /// The isentropic exponent alpha = (gamma - 1) / (2 gamma)
    pub fn gm1d2g(&self) -> f64 {
        0.5 * (self.gamma - 1.) * self.gamma_inv
    }

    pub fn gm1dgp1(&self) -> f64 {
        (self.gamma - 1.) * self.odgp1
    }

    pub fn odgm1(&self) -> f64 {
        self.odgm1
    }

    pub fn tdgm1(&self) -> f64 {
        2. * self.odgm1
    }

    pub fn tdgp1(&self) -> f64 {
        2. * self.odgp1
    }
}

/// Ideal gas equation of state.
///
/// Immutable once constructed; every part of the solver borrows it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfState {
    gamma: AdiabaticIndex,
}

impl EquationOfState {
    /// Default adiabatic index of a monatomic ideal gas.
    pub const MONATOMIC_GAMMA: f64 = 5. / 3.;

    pub fn new(gamma: f64) -> Result<Self, RiemannError> {
        if !gamma.is_finite() || gamma <= 1. {
            return Err(RiemannError::InvalidAdiabaticIndex(gamma));
        }
        Ok(Self {
            gamma: gamma.into(),
        })
    }

    pub fn gamma(&self) -> &AdiabaticIndex {
        &self.gamma
    }

    /// Local sound speed sqrt(gamma p / rho).
    ///
    /// Only defined for `density > 0`; vacuum sides must be routed elsewhere.
    pub fn sound_speed(&self, pressure: f64, density: f64) -> f64 {
        debug_assert!(density > 0., "Sound speed requested for a vacuum state!");
        (self.gamma.gamma * pressure / density).sqrt()
    }
}

impl Default for EquationOfState {
    fn default() -> Self {
        Self {
            gamma: Self::MONATOMIC_GAMMA.into(),
        }
    }
}
