use crate::{gas_law::EquationOfState, physical_quantities::Primitives};

use super::{rarefaction_fan, Side, WaveRegion};

/// The ways in which vacuum can be part of a Riemann problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VacuumKind {
    /// No gas on either side.
    Full,
    /// The left initial state is vacuum.
    LeftVacuum,
    /// The right initial state is vacuum.
    RightVacuum,
    /// Both sides contain gas, but the two rarefactions separate faster than
    /// the gas can fill the gap between them.
    Generated,
}

/// Decide whether the problem contains vacuum, and of which kind.
///
/// Sound speeds are only evaluated once both densities are known to be non-zero.
pub(super) fn vacuum_kind(
    left: &Primitives,
    right: &Primitives,
    eos: &EquationOfState,
) -> Option<VacuumKind> {
    match (left.is_vacuum(), right.is_vacuum()) {
        (true, true) => Some(VacuumKind::Full),
        (true, false) => Some(VacuumKind::LeftVacuum),
        (false, true) => Some(VacuumKind::RightVacuum),
        (false, false) => {
            let a_l = eos.sound_speed(left.pressure(), left.density());
            let a_r = eos.sound_speed(right.pressure(), right.density());
            /* vacuum generation */
            if right.velocity() - left.velocity() >= eos.gamma().tdgm1() * (a_l + a_r) {
                Some(VacuumKind::Generated)
            } else {
                None
            }
        }
    }
}

/// Does the Riemann problem between `left` and `right` contain vacuum?
pub fn is_vacuum(left: &Primitives, right: &Primitives, eos: &EquationOfState) -> bool {
    vacuum_kind(left, right, eos).is_some()
}

/// Exact solution of a Riemann problem containing vacuum.
#[derive(Debug, Clone, Copy)]
pub struct VacuumSolution<'a> {
    left: Primitives,
    right: Primitives,
    a_l: f64,
    a_r: f64,
    kind: VacuumKind,
    eos: &'a EquationOfState,
}

impl<'a> VacuumSolution<'a> {
    pub(super) fn new(
        left: Primitives,
        right: Primitives,
        kind: VacuumKind,
        eos: &'a EquationOfState,
    ) -> Self {
        let sound_speed = |state: &Primitives| {
            if state.is_vacuum() {
                0.
            } else {
                eos.sound_speed(state.pressure(), state.density())
            }
        };
        Self {
            a_l: sound_speed(&left),
            a_r: sound_speed(&right),
            left,
            right,
            kind,
            eos,
        }
    }

    pub fn kind(&self) -> VacuumKind {
        self.kind
    }

    /// Head of the left rarefaction, `SHL = uL - aL`.
    fn head_left(&self) -> f64 {
        self.left.velocity() - self.a_l
    }

    /// Tail of the left rarefaction, where it meets vacuum: `SL = uL + 2 aL / (gamma - 1)`.
    fn tail_left(&self) -> f64 {
        self.left.velocity() + self.eos.gamma().tdgm1() * self.a_l
    }

    /// Tail of the right rarefaction, where it meets vacuum: `SR = uR - 2 aR / (gamma - 1)`.
    fn tail_right(&self) -> f64 {
        self.right.velocity() - self.eos.gamma().tdgm1() * self.a_r
    }

    /// Head of the right rarefaction, `SHR = uR + aR`.
    fn head_right(&self) -> f64 {
        self.right.velocity() + self.a_r
    }

    /// The region of the solution containing `xi`.
    pub fn region(&self, xi: f64) -> WaveRegion {
        match self.kind {
            VacuumKind::Full => WaveRegion::Vacuum { velocity: 0. },
            VacuumKind::LeftVacuum => {
                let s_r = self.tail_right();
                if xi <= s_r {
                    WaveRegion::Vacuum { velocity: s_r }
                } else if xi < self.head_right() {
                    WaveRegion::Fan(Side::Right)
                } else {
                    WaveRegion::Unperturbed(Side::Right)
                }
            }
            VacuumKind::RightVacuum => {
                let s_l = self.tail_left();
                if xi >= s_l {
                    WaveRegion::Vacuum { velocity: s_l }
                } else if xi > self.head_left() {
                    WaveRegion::Fan(Side::Left)
                } else {
                    WaveRegion::Unperturbed(Side::Left)
                }
            }
            VacuumKind::Generated => {
                let s_l = self.tail_left();
                let s_r = self.tail_right();
                if xi <= self.head_left() {
                    WaveRegion::Unperturbed(Side::Left)
                } else if xi < s_l {
                    WaveRegion::Fan(Side::Left)
                } else if xi < s_r {
                    WaveRegion::Vacuum {
                        velocity: 0.5 * (s_l + s_r),
                    }
                } else if xi < self.head_right() {
                    WaveRegion::Fan(Side::Right)
                } else {
                    WaveRegion::Unperturbed(Side::Right)
                }
            }
        }
    }

    /// The state in `region` at `xi`.
    ///
    /// Regions without counterpart in a vacuum solution (star states) are vacuum.
    pub fn state(&self, region: WaveRegion, xi: f64) -> Primitives {
        match region {
            WaveRegion::Unperturbed(Side::Left) => self.left,
            WaveRegion::Unperturbed(Side::Right) => self.right,
            WaveRegion::Fan(Side::Left) => {
                rarefaction_fan(&self.left, self.a_l, xi, Side::Left, self.eos)
            }
            WaveRegion::Fan(Side::Right) => {
                rarefaction_fan(&self.right, self.a_r, xi, Side::Right, self.eos)
            }
            WaveRegion::Vacuum { velocity } => Primitives::vacuum_moving(velocity),
            WaveRegion::ShockedStar(_) | WaveRegion::RarefiedStar(_) => Primitives::vacuum(),
        }
    }

    pub fn sample(&self, xi: f64) -> Primitives {
        self.state(self.region(xi), xi)
    }
}
