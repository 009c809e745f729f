use crate::errors::RiemannError;

/// Primitive variables of a one dimensional gas state: density, velocity, pressure.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Primitives(f64, f64, f64);

impl Primitives {
    pub fn new(density: f64, velocity: f64, pressure: f64) -> Self {
        Self(density, velocity, pressure)
    }

    pub fn vacuum() -> Self {
        Self(0., 0., 0.)
    }

    /// A vacuum state that still carries a velocity (e.g. the edge of a rarefaction into vacuum).
    pub fn vacuum_moving(velocity: f64) -> Self {
        Self(0., velocity, 0.)
    }

    pub fn density(&self) -> f64 {
        self.0
    }

    pub fn velocity(&self) -> f64 {
        self.1
    }

    pub fn pressure(&self) -> f64 {
        self.2
    }

    pub fn is_vacuum(&self) -> bool {
        self.0 == 0.
    }

    /// Reject states no physical gas can be in.
    pub fn validate(&self) -> Result<(), RiemannError> {
        if !(self.0.is_finite() && self.1.is_finite() && self.2.is_finite()) {
            return Err(RiemannError::NonFiniteState);
        }
        if self.0 < 0. {
            return Err(RiemannError::NegativeDensity(self.0));
        }
        if self.2 < 0. {
            return Err(RiemannError::NegativePressure(self.2));
        }
        Ok(())
    }

    /// The same state seen from a frame moving with `velocity`.
    pub fn boost(&self, velocity: f64) -> Self {
        Self(self.0, self.1 + velocity, self.2)
    }
}

impl From<(f64, f64, f64)> for Primitives {
    fn from((density, velocity, pressure): (f64, f64, f64)) -> Self {
        Self(density, velocity, pressure)
    }
}

impl From<Primitives> for (f64, f64, f64) {
    fn from(state: Primitives) -> Self {
        (state.0, state.1, state.2)
    }
}
