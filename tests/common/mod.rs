use exact_riemann::{config::RiemannCfg, EquationOfState, ExactRiemannSolver, Primitives};

pub const SOD_CONFIG: &'static str = r##"
gas:
  gamma: 1.4
left:
  density: 1.
  velocity: 0.
  pressure: 1.
right:
  density: 0.125
  velocity: 0.
  pressure: 0.1
domain:
  num_cells: 200
output:
  time: 0.2
"##;

pub fn get_solver(gamma: f64) -> ExactRiemannSolver {
    ExactRiemannSolver::new(EquationOfState::new(gamma).expect("Error creating EOS!"))
}

pub fn get_cfg(cfg: &str) -> RiemannCfg {
    RiemannCfg::load_from_str(cfg).expect("Error loading Riemann cfg!")
}

/// Pairs of states covering all wave patterns, including vacuum.
pub fn test_problems() -> Vec<(Primitives, Primitives)> {
    vec![
        // Sod shock tube
        (Primitives::new(1., 0., 1.), Primitives::new(0.125, 0., 0.1)),
        // Toro's 123 problem: two strong rarefactions
        (Primitives::new(1., -2., 0.4), Primitives::new(1., 2., 0.4)),
        // Strong left blast wave
        (Primitives::new(1., 0., 1000.), Primitives::new(1., 0., 0.01)),
        // Strong right blast wave
        (Primitives::new(1., 0., 0.01), Primitives::new(1., 0., 100.)),
        // Colliding shocks
        (Primitives::new(5.99924, 19.5975, 460.894), Primitives::new(5.99242, -6.19633, 46.095)),
        // Noh problem
        (Primitives::new(1., 1., 1e-6), Primitives::new(1., -1., 1e-6)),
        // Expansion into vacuum
        (Primitives::new(1., 0., 1.), Primitives::vacuum()),
        (Primitives::vacuum(), Primitives::new(1., 0.5, 1.)),
        // Vacuum generation
        (Primitives::new(1., -4., 0.4), Primitives::new(1., 4., 0.4)),
        // Stationary contact
        (Primitives::new(1.4, 0., 1.), Primitives::new(1., 0., 1.)),
    ]
}
