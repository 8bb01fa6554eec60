// src/data_input/flight_log.rs

use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::{parse_f64_field, split_fields};
use crate::errors::{io_error, parse_error, Result};
use crate::types::Position;

/// Time series recorded for one UAV, as four index-aligned sequences in file order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlightLog {
    pub times: Vec<f64>,        // Sample time (s).
    pub xs: Vec<f64>,           // X position (m).
    pub ys: Vec<f64>,           // Y position (m).
    pub azimuths_deg: Vec<f64>, // Heading, degrees counter-clockwise from +X.
}

impl FlightLog {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<Position> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    pub fn first_position(&self) -> Option<Position> {
        self.position(0)
    }

    pub fn last_position(&self) -> Option<Position> {
        self.position(self.len().checked_sub(1)?)
    }

    /// (x, y) pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    fn push(&mut self, [time, x, y, azimuth_deg]: [f64; 4]) {
        self.times.push(time);
        self.xs.push(x);
        self.ys.push(y);
        self.azimuths_deg.push(azimuth_deg);
    }
}

/// Loads a `UAV<id>.txt` flight log.
///
/// The first line is a header and is always discarded. Every following non-blank
/// line must hold exactly `time x y azimuth`. A malformed line aborts the load.
pub fn load_uav_file(path: &Path) -> Result<FlightLog> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let log = read_flight_log(BufReader::new(file), path)?;
    debug!("Loaded {} samples from '{}'", log.len(), path.display());
    Ok(log)
}

/// Parses flight log content from any buffered reader; `origin` is only used in errors.
pub fn read_flight_log<R: BufRead>(reader: R, origin: &Path) -> Result<FlightLog> {
    let mut log = FlightLog::default();
    let mut lines = reader.lines();

    // Header
    if let Some(header) = lines.next() {
        header.map_err(|e| io_error(origin, e))?;
    }

    for (index, line_result) in lines.enumerate() {
        let line_number = index + 2;
        let line = line_result.map_err(|e| io_error(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let sample = parse_sample(&line).map_err(|reason| parse_error(origin, line_number, reason))?;
        log.push(sample);
    }

    Ok(log)
}

fn parse_sample(line: &str) -> std::result::Result<[f64; 4], String> {
    let [t, x, y, az] = split_fields::<4>(line)?;
    Ok([
        parse_f64_field(t, "time")?,
        parse_f64_field(x, "x")?,
        parse_f64_field(y, "y")?,
        parse_f64_field(az, "azimuth")?,
    ])
}


// src/data_input/flight_log.rs
