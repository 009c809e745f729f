use log::{debug, warn};

use crate::{gas_law::EquationOfState, physical_quantities::Primitives};

/// Floor for the star pressure and tolerance of the Newton iteration.
pub const EPSILON: f64 = 1e-6;

/// Maximal number of Newton-Raphson iterations before giving up.
pub const MAX_ITERATIONS: usize = 1000;

/// Pressure and velocity between the two waves of a non-vacuum Riemann problem,
/// together with the diagnostics of the iteration that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarState {
    pub pressure: f64,
    pub velocity: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Functions (4.6) and (4.7) in Toro.
pub(super) fn fb(p: f64, state: &Primitives, a: f64, eos: &EquationOfState) -> f64 {
    let gamma = eos.gamma();
    if p > state.pressure() {
        let cap_a = gamma.tdgp1() / state.density();
        let cap_b = gamma.gm1dgp1() * state.pressure();
        (p - state.pressure()) * (cap_a / (p + cap_b)).sqrt()
    } else {
        gamma.tdgm1() * a * ((p / state.pressure()).powf(gamma.gm1d2g()) - 1.)
    }
}

/// Function (4.5) in Toro
pub(super) fn f(
    p: f64,
    left: &Primitives,
    right: &Primitives,
    a_l: f64,
    a_r: f64,
    eos: &EquationOfState,
) -> f64 {
    fb(p, left, a_l, eos) + fb(p, right, a_r, eos) + (right.velocity() - left.velocity())
}

/// Function (4.37) in Toro
fn fprimeb(p: f64, state: &Primitives, a: f64, eos: &EquationOfState) -> f64 {
    let gamma = eos.gamma();
    if p > state.pressure() {
        let cap_a = gamma.tdgp1() / state.density();
        let cap_b = gamma.gm1dgp1() * state.pressure();
        (1. - 0.5 * (p - state.pressure()) / (cap_b + p)) * (cap_a / (p + cap_b)).sqrt()
    } else {
        1. / (state.density() * a) * (p / state.pressure()).powf(-gamma.hgp1dg())
    }
}

/// The derivative of f w.r.t. p
fn fprime(
    p: f64,
    left: &Primitives,
    right: &Primitives,
    a_l: f64,
    a_r: f64,
    eos: &EquationOfState,
) -> f64 {
    fprimeb(p, left, a_l, eos) + fprimeb(p, right, a_r, eos)
}

/// First guess for the pressure, based on the linearised (primitive variable)
/// solution and floored at [`EPSILON`].
fn guess_p(left: &Primitives, right: &Primitives, a_l: f64, a_r: f64) -> f64 {
    let ppv = 0.5 * (left.pressure() + right.pressure())
        - 0.125
            * (right.velocity() - left.velocity())
            * (left.density() + right.density())
            * (a_l + a_r);
    ppv.max(EPSILON)
}

/// Find the zeropoint of f(p) using Newton-Raphson.
///
/// Both states must have non-zero density, i.e. the problem must not contain vacuum.
/// Iterates are clamped to [`EPSILON`]. If the root lies below that floor, or
/// [`MAX_ITERATIONS`] is reached for another reason, the last
/// iterate is returned with `converged` unset.
pub(super) fn solve_for_star_state(
    left: &Primitives,
    right: &Primitives,
    a_l: f64,
    a_r: f64,
    eos: &EquationOfState,
) -> StarState {
    let mut p = guess_p(left, right, a_l, a_r);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let p_new = p - f(p, left, right, a_l, a_r, eos) / fprime(p, left, right, a_l, a_r, eos);
        // Measured before clamping: a step pushed back onto the floor is no convergence.
        let diff = 2. * (p_new - p).abs() / (p_new + p).abs();
        p = p_new.max(EPSILON);
        if diff < EPSILON {
            converged = true;
            break;
        }
    }

    if converged {
        debug!("Found star state pressure after {} iterations", iterations);
    } else {
        warn!(
            "Newton-Raphson iteration for the star pressure did not converge after {} iterations, continuing with p = {}",
            iterations, p
        );
    }

    let u = left.velocity() - fb(p, left, a_l, eos);
    debug!("Got pstar = {:12.6}, ustar = {:12.6}", p, u);

    StarState {
        pressure: p,
        velocity: u,
        iterations,
        converged,
    }
}
