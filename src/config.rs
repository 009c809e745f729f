//! Run configuration, read from YAML.
//!
//! ```yaml
//! gas:
//!   gamma: 1.4
//! left:
//!   density: 1.
//!   velocity: 0.
//!   pressure: 1.
//! right:
//!   density: 0.125
//!   velocity: 0.
//!   pressure: 0.1
//! domain:
//!   num_cells: 200
//! output:
//!   times: [0.1, 0.2]
//!   prefix: "sodshock_"
//! ```

use std::{error::Error, fs, path::Path};

use yaml_rust::{Yaml, YamlLoader};

use crate::{errors::ConfigError, gas_law::EquationOfState, physical_quantities::Primitives};

fn yaml_f64(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

fn required_f64(yaml: &Yaml, name: &str) -> Result<f64, ConfigError> {
    yaml_f64(&yaml[name]).ok_or(ConfigError::MissingParameter(name.to_string()))
}

pub struct GasCfg {
    pub gamma: f64,
}

impl GasCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let gamma = if yaml["gamma"].is_badvalue() {
            EquationOfState::MONATOMIC_GAMMA
        } else {
            yaml_f64(&yaml["gamma"]).ok_or(ConfigError::InvalidValue("gas: gamma".to_string()))?
        };
        Ok(Self { gamma })
    }
}

fn parse_state(yaml: &Yaml, side: &str) -> Result<Primitives, ConfigError> {
    let field = |name: &str| {
        required_f64(yaml, name).map_err(|_| ConfigError::MissingParameter(format!("{side}: {name}")))
    };
    Ok(Primitives::new(
        field("density")?,
        field("velocity")?,
        field("pressure")?,
    ))
}

pub struct DomainCfg {
    pub num_cells: usize,
    pub split: Option<usize>,
}

impl DomainCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let num_cells = match &yaml["num_cells"] {
            Yaml::BadValue => 200,
            Yaml::Integer(i) if *i >= 2 => *i,
            _ => return Err(ConfigError::InvalidValue("domain: num_cells".to_string())),
        };
        let split = match &yaml["split"] {
            Yaml::BadValue => None,
            Yaml::Integer(i) if *i > 0 => Some(*i as usize),
            _ => return Err(ConfigError::InvalidValue("domain: split".to_string())),
        };
        Ok(Self {
            num_cells: num_cells as usize,
            split,
        })
    }
}

pub struct OutputCfg {
    pub times: Vec<f64>,
    pub prefix: Option<String>,
}

impl OutputCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let times = match (&yaml["times"], &yaml["time"]) {
            (Yaml::Array(arr), _) => arr
                .iter()
                .map(|y| yaml_f64(y).ok_or(ConfigError::InvalidValue("output: times".to_string())))
                .collect::<Result<Vec<_>, _>>()?,
            (_, time) if !time.is_badvalue() => {
                vec![yaml_f64(time).ok_or(ConfigError::InvalidValue("output: time".to_string()))?]
            }
            _ => return Err(ConfigError::MissingParameter("output: times".to_string())),
        };
        if times.is_empty() {
            return Err(ConfigError::InvalidArrayLength(1, 0));
        }
        let prefix = yaml["prefix"].as_str().map(|s| s.to_string());
        Ok(Self { times, prefix })
    }
}

/// A complete run: one Riemann problem, sampled at one or more times.
pub struct RiemannCfg {
    pub gas: GasCfg,
    pub left: Primitives,
    pub right: Primitives,
    pub domain: DomainCfg,
    pub output: OutputCfg,
}

impl RiemannCfg {
    pub fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        Ok(Self {
            gas: GasCfg::parse(&yaml["gas"])?,
            left: parse_state(&yaml["left"], "left")?,
            right: parse_state(&yaml["right"], "right")?,
            domain: DomainCfg::parse(&yaml["domain"])?,
            output: OutputCfg::parse(&yaml["output"])?,
        })
    }

    pub fn load_from_str(source: &str) -> Result<Self, Box<dyn Error>> {
        let docs = YamlLoader::load_from_str(source)?;
        let config_yml = docs
            .first()
            .ok_or(ConfigError::MissingParameter("configuration document".to_string()))?;
        Ok(Self::parse(config_yml)?)
    }

    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self, Box<dyn Error>> {
        Self::load_from_str(&fs::read_to_string(file)?)
    }
}
