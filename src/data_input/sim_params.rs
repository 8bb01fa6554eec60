// src/data_input/sim_params.rs

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{io_error, parse_error, FlightVizError, Result};

/// Keys that must be present in a simulation parameter file.
pub const REQUIRED_KEYS: [&str; 9] = ["Dt", "N_uav", "R", "X0", "Y0", "Z0", "V0", "Az", "TimeLim"];

/// Simulation parameters read from a `key = value` file.
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    pub dt: f64,          // Time step (s).
    pub n_uav: usize,     // Number of simulated UAVs.
    pub turn_radius: f64, // Minimum turn radius and orbit radius (m).
    pub x0: f64,          // Initial position (m).
    pub y0: f64,
    pub z0: f64,
    pub v0: f64,        // Constant ground speed (m/s).
    pub az0: f64,       // Initial azimuth (deg).
    pub time_lim: f64,  // Simulation end time (s).
}

impl SimParams {
    pub fn parse(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        Self::read(BufReader::new(file), path)
    }

    /// Parses parameters from a reader. Lines without `=` are ignored.
    pub fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut values: HashMap<String, f64> = HashMap::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|e| io_error(origin, e))?;
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            let parsed = value.parse::<f64>().map_err(|e| {
                parse_error(origin, index + 1, format!("invalid value '{value}' for {key}: {e}"))
            })?;
            values.insert(key.to_string(), parsed);
        }

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !values.contains_key(**key)) {
            return Err(FlightVizError::MissingKey {
                path: origin.to_path_buf(),
                key: missing.to_string(),
            });
        }
        let get = |key: &str| values.get(key).copied().unwrap_or_default();

        let params = SimParams {
            dt: get("Dt"),
            n_uav: get("N_uav").max(0.0) as usize,
            turn_radius: get("R"),
            x0: get("X0"),
            y0: get("Y0"),
            z0: get("Z0"),
            v0: get("V0"),
            az0: get("Az"),
            time_lim: get("TimeLim"),
        };
        params.validate()?;
        Ok(params)
    }

    /// Rejects values the kinematics cannot integrate.
    pub fn validate(&self) -> Result<()> {
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(FlightVizError::InvalidParams(format!(
                "Dt must be a positive number, got {}",
                self.dt
            )));
        }
        if !(self.turn_radius > 0.0 && self.turn_radius.is_finite()) {
            return Err(FlightVizError::InvalidParams(format!(
                "R must be a positive number, got {}",
                self.turn_radius
            )));
        }
        if !self.time_lim.is_finite() {
            return Err(FlightVizError::InvalidParams(format!(
                "TimeLim must be finite, got {}",
                self.time_lim
            )));
        }
        Ok(())
    }
}


// src/data_input/sim_params.rs
