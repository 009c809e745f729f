use crate::{gas_law::EquationOfState, physical_quantities::Primitives};

use super::{exact, rarefaction_fan, Side, StarState, WaveRegion};

/// Solution of a Riemann problem without vacuum: a left wave, a contact
/// discontinuity moving with the star velocity and a right wave.
#[derive(Debug, Clone, Copy)]
pub struct StarSolution<'a> {
    left: Primitives,
    right: Primitives,
    a_l: f64,
    a_r: f64,
    star: StarState,
    eos: &'a EquationOfState,
}

impl<'a> StarSolution<'a> {
    pub(super) fn new(
        left: Primitives,
        right: Primitives,
        a_l: f64,
        a_r: f64,
        star: StarState,
        eos: &'a EquationOfState,
    ) -> Self {
        Self {
            left,
            right,
            a_l,
            a_r,
            star,
            eos,
        }
    }

    pub fn star(&self) -> &StarState {
        &self.star
    }

    pub fn left(&self) -> &Primitives {
        &self.left
    }

    pub fn right(&self) -> &Primitives {
        &self.right
    }

    /// f(p*) = f_L(p*) + f_R(p*) + u_R - u_L, zero for an exact star pressure.
    pub fn residual(&self) -> f64 {
        exact::f(
            self.star.pressure,
            &self.left,
            &self.right,
            self.a_l,
            self.a_r,
            self.eos,
        )
    }

    fn side_state(&self, side: Side) -> (&Primitives, f64) {
        match side {
            Side::Left => (&self.left, self.a_l),
            Side::Right => (&self.right, self.a_r),
        }
    }

    /// Is the wave travelling into the initial state of `side` a shock?
    pub fn is_shock(&self, side: Side) -> bool {
        self.star.pressure > self.side_state(side).0.pressure()
    }

    /// Speed of the shock on `side`.
    ///
    /// Written as u -/+ sqrt(((gamma + 1) p* + (gamma - 1) p) / (2 rho)), which equals
    /// u -/+ a sqrt((gamma + 1) / (2 gamma) p* / p + (gamma - 1) / (2 gamma)) but stays
    /// defined for a pressureless initial state.
    pub fn shock_speed(&self, side: Side) -> f64 {
        let gamma = self.eos.gamma();
        let (state, _) = self.side_state(side);
        let w = (0.5 * (gamma.gp1() * self.star.pressure + gamma.gm1() * state.pressure())
            / state.density())
        .sqrt();
        state.velocity() + side.sign() * w
    }

    /// Speed of the head of the rarefaction fan on `side`.
    pub fn head_speed(&self, side: Side) -> f64 {
        let (state, a) = self.side_state(side);
        state.velocity() + side.sign() * a
    }

    /// Speed of the tail of the rarefaction fan on `side`.
    pub fn tail_speed(&self, side: Side) -> f64 {
        let (state, a) = self.side_state(side);
        let a_star = a * (self.star.pressure / state.pressure()).powf(self.eos.gamma().gm1d2g());
        self.star.velocity + side.sign() * a_star
    }

    /// Decision table for one side of the contact discontinuity.
    ///
    /// With `s = -1` for the left and `s = 1` for the right side, `xi` lies
    /// - outside a shock with speed `S` iff `s (xi - S) > 0`,
    /// - outside a fan with head speed `SH` iff `s (xi - SH) > 0`,
    /// - in the star region behind a fan with tail speed `ST` iff `s (xi - ST) < 0`,
    /// - inside the fan otherwise.
    fn side_region(&self, xi: f64, side: Side) -> WaveRegion {
        let s = side.sign();
        if self.is_shock(side) {
            if s * (xi - self.shock_speed(side)) > 0. {
                WaveRegion::Unperturbed(side)
            } else {
                WaveRegion::ShockedStar(side)
            }
        } else if s * (xi - self.head_speed(side)) > 0. {
            WaveRegion::Unperturbed(side)
        } else if s * (xi - self.tail_speed(side)) < 0. {
            WaveRegion::RarefiedStar(side)
        } else {
            WaveRegion::Fan(side)
        }
    }

    /// The region of the solution containing `xi`.
    pub fn region(&self, xi: f64) -> WaveRegion {
        if xi < self.star.velocity {
            self.side_region(xi, Side::Left)
        } else {
            self.side_region(xi, Side::Right)
        }
    }

    /// The state in `region` at `xi`. `xi` only matters inside a fan.
    pub fn state(&self, region: WaveRegion, xi: f64) -> Primitives {
        let gamma = self.eos.gamma();
        match region {
            WaveRegion::Unperturbed(side) => *self.side_state(side).0,
            WaveRegion::ShockedStar(side) => {
                let state = self.side_state(side).0;
                let g = gamma.gm1dgp1();
                let p_star = self.star.pressure;
                let density = state.density() * (p_star + g * state.pressure())
                    / (g * p_star + state.pressure());
                Primitives::new(density, self.star.velocity, p_star)
            }
            WaveRegion::RarefiedStar(side) => {
                let state = self.side_state(side).0;
                let density = state.density()
                    * (self.star.pressure / state.pressure()).powf(gamma.gamma_inv());
                Primitives::new(density, self.star.velocity, self.star.pressure)
            }
            WaveRegion::Fan(side) => {
                let (state, a) = self.side_state(side);
                rarefaction_fan(state, a, xi, side, self.eos)
            }
            WaveRegion::Vacuum { velocity } => Primitives::vacuum_moving(velocity),
        }
    }

    pub fn sample(&self, xi: f64) -> Primitives {
        self.state(self.region(xi), xi)
    }
}

#[cfg(test)]
mod tests {
    use crate::riemann_solver::{ExactRiemannSolver, RiemannSolution};

    use super::*;
    use float_cmp::assert_approx_eq;

    fn sod(solver: &ExactRiemannSolver) -> StarSolution<'_> {
        match solver
            .solve(&Primitives::new(1., 0., 1.), &Primitives::new(0.125, 0., 0.1))
            .unwrap()
        {
            RiemannSolution::Star(solution) => solution,
            RiemannSolution::Vacuum(_) => panic!("Sod shock tube has no vacuum!"),
        }
    }

    #[test]
    fn test_sod_regions() {
        let solver = ExactRiemannSolver::new(EquationOfState::new(1.4).unwrap());
        let solution = sod(&solver);
        assert!(!solution.is_shock(Side::Left));
        assert!(solution.is_shock(Side::Right));

        assert_eq!(solution.region(-1.5), WaveRegion::Unperturbed(Side::Left));
        assert_eq!(solution.region(-0.5), WaveRegion::Fan(Side::Left));
        assert_eq!(solution.region(0.5), WaveRegion::RarefiedStar(Side::Left));
        assert_eq!(solution.region(1.2), WaveRegion::ShockedStar(Side::Right));
        assert_eq!(solution.region(1.8), WaveRegion::Unperturbed(Side::Right));

        // Wave speeds are ordered head < tail < contact < shock
        let head = solution.head_speed(Side::Left);
        let tail = solution.tail_speed(Side::Left);
        let contact = solution.star().velocity;
        let shock = solution.shock_speed(Side::Right);
        assert!(head < tail && tail < contact && contact < shock);
        assert_approx_eq!(f64, head, -1.4f64.sqrt(), epsilon = 1e-12);
        assert_approx_eq!(f64, shock, 1.7521557320301779, epsilon = 1e-6);
    }

    #[test]
    fn test_sod_states() {
        let solver = ExactRiemannSolver::new(EquationOfState::new(1.4).unwrap());
        let solution = sod(&solver);

        let fan = solution.sample(-0.5);
        assert_approx_eq!(f64, fan.density(), 0.6029376964981807, epsilon = 1e-7);
        assert_approx_eq!(f64, fan.velocity(), 0.5693466305166027, epsilon = 1e-7);
        assert_approx_eq!(f64, fan.pressure(), 0.49247185155322243, epsilon = 1e-7);

        let star_l = solution.sample(0.5);
        assert_approx_eq!(f64, star_l.density(), 0.4263194281784952, epsilon = 1e-7);
        let star_r = solution.sample(1.2);
        assert_approx_eq!(f64, star_r.density(), 0.2655737117053071, epsilon = 1e-7);
    }

    #[test]
    fn test_contact_continuity() {
        let solver = ExactRiemannSolver::new(EquationOfState::new(5. / 3.).unwrap());
        for (left, right) in [
            (Primitives::new(1., 0., 1.), Primitives::new(0.125, 0., 0.1)),
            (Primitives::new(0.75, 0.6, 0.8), Primitives::new(0.55, -0.25, 0.5)),
            (Primitives::new(1.75, -0.1, 0.75), Primitives::new(0.55, 1.5, 0.5)),
        ] {
            let solution = match solver.solve(&left, &right).unwrap() {
                RiemannSolution::Star(solution) => solution,
                RiemannSolution::Vacuum(_) => unreachable!(),
            };
            let u_star = solution.star().velocity;
            let p_star = solution.star().pressure;
            let left_region = solution.side_region(u_star, Side::Left);
            let right_region = solution.side_region(u_star, Side::Right);
            let star_l = solution.state(left_region, u_star);
            let star_r = solution.state(right_region, u_star);
            assert_approx_eq!(f64, star_l.pressure(), p_star, epsilon = 1e-12);
            assert_approx_eq!(f64, star_r.pressure(), p_star, epsilon = 1e-12);
            assert_approx_eq!(f64, star_l.velocity(), star_r.velocity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fan_tail_matches_star() {
        let solver = ExactRiemannSolver::new(EquationOfState::new(1.4).unwrap());
        let solution = sod(&solver);
        let tail = solution.tail_speed(Side::Left);
        let fan = solution.state(WaveRegion::Fan(Side::Left), tail);
        let star = solution.state(WaveRegion::RarefiedStar(Side::Left), tail);
        assert_approx_eq!(f64, fan.density(), star.density(), epsilon = 1e-6);
        assert_approx_eq!(f64, fan.velocity(), star.velocity(), epsilon = 1e-6);
        assert_approx_eq!(f64, fan.pressure(), star.pressure(), epsilon = 1e-6);
    }
}
