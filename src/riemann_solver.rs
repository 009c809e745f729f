//! Exact solution of the Riemann problem for the 1D Euler equations of an ideal gas.
//!
//! Solving a problem happens in two stages: [`ExactRiemannSolver::solve`] validates the
//! two states, decides whether vacuum is present and (if not) iterates for the star
//! state. The returned [`RiemannSolution`] can then be sampled at any self-similar
//! coordinate `xi = x / t`, independently for every query.

use log::debug;

use crate::{errors::RiemannError, gas_law::EquationOfState, physical_quantities::Primitives};

mod exact;
mod sampler;
mod vacuum;

pub use exact::{StarState, EPSILON, MAX_ITERATIONS};
pub use sampler::StarSolution;
pub use vacuum::{is_vacuum, VacuumKind, VacuumSolution};

/// The side of the initial discontinuity a wave belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Direction in which this side's waves travel away from the contact.
    pub(crate) fn sign(&self) -> f64 {
        match self {
            Side::Left => -1.,
            Side::Right => 1.,
        }
    }
}

/// The region of the self-similar solution a sample point falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveRegion {
    /// Ahead of the wave travelling into this side's initial state.
    Unperturbed(Side),
    /// Between a shock and the contact discontinuity.
    ShockedStar(Side),
    /// Inside a rarefaction fan.
    Fan(Side),
    /// Between the tail of a rarefaction fan and the contact discontinuity.
    RarefiedStar(Side),
    /// No gas, moving with the given velocity.
    Vacuum { velocity: f64 },
}

/// The self-similar state inside a rarefaction fan of `state` at `xi`.
///
/// `a` is the sound speed of `state`. The base is clamped at zero, so round-off
/// at the vacuum edge of a fan never yields NaN or negative densities.
pub(crate) fn rarefaction_fan(
    state: &Primitives,
    a: f64,
    xi: f64,
    side: Side,
    eos: &EquationOfState,
) -> Primitives {
    let gamma = eos.gamma();
    let s = side.sign();
    let base = (gamma.tdgp1() - s * gamma.gm1dgp1() / a * (state.velocity() - xi)).max(0.);
    let fact = base.powf(gamma.tdgm1());
    Primitives::new(
        state.density() * fact,
        gamma.tdgp1() * (gamma.hgm1() * state.velocity() - s * a + xi),
        state.pressure() * fact.powf(gamma.gamma()),
    )
}

/// Exact Riemann solver for an ideal gas.
///
/// Holds the equation of state that every solution it produces borrows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactRiemannSolver {
    eos: EquationOfState,
}

impl ExactRiemannSolver {
    pub fn new(eos: EquationOfState) -> Self {
        Self { eos }
    }

    pub fn eos(&self) -> &EquationOfState {
        &self.eos
    }

    /// Solve the Riemann problem between `left` and `right`.
    ///
    /// Fails only when one of the states is unphysical. A Newton iteration that hits
    /// the iteration cap still yields a solution, flagged in its [`StarState`].
    pub fn solve(
        &self,
        left: &Primitives,
        right: &Primitives,
    ) -> Result<RiemannSolution<'_>, RiemannError> {
        left.validate()?;
        right.validate()?;
        debug!(
            "Solving Riemann problem with left: {:?}, right: {:?}, gamma: {}",
            left,
            right,
            self.eos.gamma().gamma()
        );

        if let Some(kind) = vacuum::vacuum_kind(left, right, &self.eos) {
            debug!("Vacuum present: {:?}", kind);
            return Ok(RiemannSolution::Vacuum(VacuumSolution::new(
                *left, *right, kind, &self.eos,
            )));
        }

        let a_l = self.eos.sound_speed(left.pressure(), left.density());
        let a_r = self.eos.sound_speed(right.pressure(), right.density());
        let star = exact::solve_for_star_state(left, right, a_l, a_r, &self.eos);
        Ok(RiemannSolution::Star(StarSolution::new(
            *left, *right, a_l, a_r, star, &self.eos,
        )))
    }
}

/// A solved Riemann problem, ready to be sampled.
#[derive(Debug, Clone, Copy)]
pub enum RiemannSolution<'a> {
    Star(StarSolution<'a>),
    Vacuum(VacuumSolution<'a>),
}

impl<'a> RiemannSolution<'a> {
    /// The star state, absent when vacuum is present or created.
    pub fn star_state(&self) -> Option<&StarState> {
        match self {
            RiemannSolution::Star(solution) => Some(solution.star()),
            RiemannSolution::Vacuum(_) => None,
        }
    }

    pub fn region(&self, xi: f64) -> WaveRegion {
        match self {
            RiemannSolution::Star(solution) => solution.region(xi),
            RiemannSolution::Vacuum(solution) => solution.region(xi),
        }
    }

    /// Sample the solution at the self-similar coordinate `xi = x / t`.
    pub fn sample(&self, xi: f64) -> Primitives {
        match self {
            RiemannSolution::Star(solution) => solution.sample(xi),
            RiemannSolution::Vacuum(solution) => solution.sample(xi),
        }
    }

    /// Sample the solution at distance `x` from the initial discontinuity at time `t > 0`.
    pub fn sample_at(&self, x: f64, t: f64) -> Result<Primitives, RiemannError> {
        if !(t.is_finite() && t > 0.) {
            return Err(RiemannError::InvalidTime(t));
        }
        Ok(self.sample(x / t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const GAMMA: f64 = 5. / 3.;

    fn solver(gamma: f64) -> ExactRiemannSolver {
        ExactRiemannSolver::new(EquationOfState::new(gamma).unwrap())
    }

    fn get_half(
        rho_l: f64,
        v_l: f64,
        p_l: f64,
        rho_r: f64,
        v_r: f64,
        p_r: f64,
        solver: &ExactRiemannSolver,
    ) -> Primitives {
        let left = Primitives::new(rho_l, v_l, p_l);
        let right = Primitives::new(rho_r, v_r, p_r);
        solver.solve(&left, &right).unwrap().sample(0.)
    }

    #[test]
    fn test_half_state() {
        let solver = solver(GAMMA);

        // Left shock
        let half = get_half(0.75, 0.6, 0.8, 0.55, -0.25, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.8927393244785966, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), 0.35966250129769556, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 1.0709476357371466, epsilon = 1e-9);

        // right shock
        let half = get_half(0.75, 0.3, 0.8, 0.55, -0.75, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.9114320476995261, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), -0.03895103710637815, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 1.201228148376388, epsilon = 1e-9);

        // Left rarefaction (middle state)
        let half = get_half(0.75, 0.1, 0.8, 0.55, 0.5, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.5562398903431287, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), 0.4792910646431622, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 0.4861363537732538, epsilon = 1e-9);

        // Left rarefaction (fan)
        let half = get_half(1.75, -0.1, 0.75, 0.55, 1.5, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.65432665196683, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), 0.6088656910463873, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 0.14554217677392042, epsilon = 1e-9);

        // Right rarefaction (middle state)
        let half = get_half(0.75, -0.5, 0.8, 0.55, -0.1, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.5407985848180775, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), -0.1207089353568378, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 0.4861363537732538, epsilon = 1e-9);

        // Right rarefaction (fan)
        let half = get_half(1.75, -1.5, 0.75, 1.55, 0.1, 0.5, &solver);
        assert_approx_eq!(f64, half.density(), 0.5687181105004402, epsilon = 1e-9);
        assert_approx_eq!(f64, half.velocity(), -0.5249266813300747, epsilon = 1e-9);
        assert_approx_eq!(f64, half.pressure(), 0.09402548983542296, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetry() {
        // Mirroring the problem mirrors the solution.
        let solver = solver(GAMMA);
        let left = Primitives::new(1.2, 0.3, 0.9);
        let right = Primitives::new(0.4, -0.6, 0.2);
        let left_reversed = Primitives::new(0.4, 0.6, 0.2);
        let right_reversed = Primitives::new(1.2, -0.3, 0.9);
        let solution = solver.solve(&left, &right).unwrap();
        let solution_reversed = solver.solve(&left_reversed, &right_reversed).unwrap();

        for xi in [-2.1, -1.3, -0.7, -0.2, 0.15, 0.55, 1.2, 2.4] {
            let state = solution.sample(xi);
            let state_reversed = solution_reversed.sample(-xi);
            assert_approx_eq!(f64, state.density(), state_reversed.density(), epsilon = 1e-9);
            assert_approx_eq!(f64, state.velocity(), -state_reversed.velocity(), epsilon = 1e-9);
            assert_approx_eq!(f64, state.pressure(), state_reversed.pressure(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rejects_invalid_states() {
        let solver = solver(GAMMA);
        let valid = Primitives::new(1., 0., 1.);
        assert_eq!(
            solver.solve(&Primitives::new(-1., 0., 1.), &valid).unwrap_err(),
            RiemannError::NegativeDensity(-1.)
        );
        assert_eq!(
            solver.solve(&valid, &Primitives::new(1., 0., -1e-3)).unwrap_err(),
            RiemannError::NegativePressure(-1e-3)
        );
    }

    #[test]
    fn test_sample_at() {
        let solver = solver(1.4);
        let solution = solver
            .solve(&Primitives::new(1., 0., 1.), &Primitives::new(0.125, 0., 0.1))
            .unwrap();
        let state = solution.sample_at(0.25, 0.5).unwrap();
        assert_eq!(state, solution.sample(0.5));
        assert_eq!(solution.sample_at(0.25, 0.), Err(RiemannError::InvalidTime(0.)));
        assert_eq!(solution.sample_at(0.25, -1.), Err(RiemannError::InvalidTime(-1.)));
    }

    #[test]
    fn test_fan_edges() {
        // The fan joins the unperturbed state at its head.
        let eos = EquationOfState::new(1.4).unwrap();
        let state = Primitives::new(1., 0.2, 1.);
        let a = eos.sound_speed(1., 1.);
        let head = rarefaction_fan(&state, a, 0.2 - a, Side::Left, &eos);
        assert_approx_eq!(f64, head.density(), 1., epsilon = 1e-12);
        assert_approx_eq!(f64, head.velocity(), 0.2, epsilon = 1e-12);
        assert_approx_eq!(f64, head.pressure(), 1., epsilon = 1e-12);
        let head = rarefaction_fan(&state, a, 0.2 + a, Side::Right, &eos);
        assert_approx_eq!(f64, head.density(), 1., epsilon = 1e-12);
        assert_approx_eq!(f64, head.velocity(), 0.2, epsilon = 1e-12);

        // Beyond the vacuum edge the base would go negative.
        let edge = 0.2 + eos.gamma().tdgm1() * a;
        let beyond = rarefaction_fan(&state, a, edge + 1e-3, Side::Left, &eos);
        assert_eq!(beyond.density(), 0.);
        assert_eq!(beyond.pressure(), 0.);
    }
}
