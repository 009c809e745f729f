use clap::Parser;
use exact_riemann::{config::RiemannCfg, EquationOfState, ExactRiemannSolver, Profile};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path,
};

#[derive(Parser)]
pub struct Cli {
    /// The path to the config file to read
    #[clap(parse(from_os_str))]
    pub config: path::PathBuf,

    /// Sample at this time instead of the configured output times
    #[clap(short, long)]
    pub time: Option<f64>,

    /// Log level (error, warn, info, debug, trace)
    #[clap(short, long, default_value = "info")]
    pub verbosity: LevelFilter,
}

fn write_profile<W: Write>(writer: &mut W, profile: &Profile, t: f64) -> io::Result<()> {
    writeln!(writer, "# t = {t}")?;
    writeln!(writer, "# x rho u p")?;
    for idx in 0..profile.len() {
        writeln!(
            writer,
            "{:.8e} {:.8e} {:.8e} {:.8e}",
            profile.cell_center(idx),
            profile.density()[idx],
            profile.velocity()[idx],
            profile.pressure()[idx]
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // parse command line parameters
    let args = Cli::parse();
    SimpleLogger::new().with_level(args.verbosity).init()?;

    // read configuration
    let config = RiemannCfg::from_file(&args.config)?;
    let times = match args.time {
        Some(t) => vec![t],
        None => config.output.times.clone(),
    };

    // Setup problem
    let solver = ExactRiemannSolver::new(EquationOfState::new(config.gas.gamma)?);
    let profile = Profile::two_state(config.domain.num_cells, config.left, config.right)?;
    let split = config.domain.split.unwrap_or_else(|| profile.default_split());
    info!(
        "Solving Riemann problem on {} cells with left: {:?}, right: {:?}",
        profile.len(),
        config.left,
        config.right
    );

    // sample
    for (snap, t) in times.into_iter().enumerate() {
        let solution = solver.solve_profile_split(&profile, split, t)?;
        if let Some(star) = solution.star {
            info!(
                "t = {}: pstar = {:.6}, ustar = {:.6} ({} iterations)",
                t, star.pressure, star.velocity, star.iterations
            );
            if !star.converged {
                warn!("Star state did not converge, the sampled profile is approximate!");
            }
        }
        match &config.output.prefix {
            Some(prefix) => {
                let filename = format!("{}{:04}.txt", prefix, snap);
                info!("Writing solution at t = {} to {}", t, filename);
                let mut writer = BufWriter::new(File::create(filename)?);
                write_profile(&mut writer, &solution.profile, t)?;
            }
            None => write_profile(&mut io::stdout().lock(), &solution.profile, t)?,
        }
    }

    info!("Done!");
    Ok(())
}
