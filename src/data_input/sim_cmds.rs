// src/data_input/sim_cmds.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::{parse_f64_field, split_fields};
use crate::errors::{io_error, parse_error, Result};
use crate::types::UavId;

/// One retargeting command: at `time`, UAV `uav_id` heads for (`target_x`, `target_y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimCommand {
    pub time: f64,
    pub uav_id: UavId,
    pub target_x: f64,
    pub target_y: f64,
}

/// Command schedule, ordered by time. Commands sharing a time keep their file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimCmds {
    pub commands: Vec<SimCommand>,
}

impl SimCmds {
    pub fn parse(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        Self::read(BufReader::new(file), path)
    }

    pub fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut commands = Vec::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|e| io_error(origin, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let command =
                parse_command(&line).map_err(|reason| parse_error(origin, index + 1, reason))?;
            commands.push(command);
        }
        commands.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(SimCmds { commands })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn parse_command(line: &str) -> std::result::Result<SimCommand, String> {
    let [time, id, x, y] = split_fields::<4>(line)?;
    Ok(SimCommand {
        time: parse_f64_field(time, "time")?,
        uav_id: id
            .parse::<UavId>()
            .map_err(|e| format!("invalid UAV id '{id}': {e}"))?,
        target_x: parse_f64_field(x, "target x")?,
        target_y: parse_f64_field(y, "target y")?,
    })
}


// src/data_input/sim_cmds.rs
