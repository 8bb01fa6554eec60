// src/data_input/targets.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data_input::{parse_f64_field, split_fields};
use crate::errors::{io_error, parse_error, Result};
use crate::types::{Position, TargetMap, UavId};

/// Loads the final target of every UAV from a command file.
///
/// Each non-blank line is `time uav_id target_x target_y`. The time column is ignored;
/// when an id appears more than once the last line wins.
pub fn load_final_targets(path: &Path) -> Result<TargetMap> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    read_final_targets(BufReader::new(file), path)
}

pub fn read_final_targets<R: BufRead>(reader: R, origin: &Path) -> Result<TargetMap> {
    let mut targets = TargetMap::new();
    for (index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| io_error(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let (uav_id, target) =
            parse_target_line(&line).map_err(|reason| parse_error(origin, index + 1, reason))?;
        targets.insert(uav_id, target);
    }
    Ok(targets)
}

fn parse_target_line(line: &str) -> std::result::Result<(UavId, Position), String> {
    let [_time, id, x, y] = split_fields::<4>(line)?;
    let uav_id = id
        .parse::<UavId>()
        .map_err(|e| format!("invalid UAV id '{id}': {e}"))?;
    Ok((uav_id, (parse_f64_field(x, "target x")?, parse_f64_field(y, "target y")?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FlightVizError;
    use std::io::Cursor;

    fn read(content: &str) -> Result<TargetMap> {
        read_final_targets(Cursor::new(content), Path::new("SimCmds.txt"))
    }

    #[test]
    fn single_command_maps_to_target() {
        let targets = read("5 2 10.0 20.0\n").unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get(&2), Some(&(10.0, 20.0)));
    }

    #[test]
    fn last_duplicate_wins() {
        let targets = read("0 1 10 10\n5 2 -5 7.5\n12 1 40 -20\n").unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[&1], (40.0, -20.0));
        assert_eq!(targets[&2], (-5.0, 7.5));
    }

    #[test]
    fn blank_only_file_is_empty() {
        let targets = read("\n   \n\t\n").unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn time_column_is_not_validated() {
        let targets = read("later 3 1 2\n").unwrap();
        assert_eq!(targets[&3], (1.0, 2.0));
    }

    #[test]
    fn keys_iterate_in_ascending_order() {
        let targets = read("0 9 0 0\n0 0 0 0\n0 4 0 0\n").unwrap();
        let ids: Vec<UavId> = targets.keys().copied().collect();
        assert_eq!(ids, vec![0, 4, 9]);
    }

    #[test]
    fn negative_id_is_an_ordinary_key() {
        let targets = read("0 -1 10 20\n0 2 5 5\n").unwrap();
        let ids: Vec<UavId> = targets.keys().copied().collect();
        assert_eq!(ids, vec![-1, 2]);
        assert_eq!(targets[&-1], (10.0, 20.0));
    }

    #[test]
    fn non_integer_id_fails() {
        let err = read("0 1 1 1\n1 2.5 3 4\n").unwrap_err();
        assert!(matches!(err, FlightVizError::Parse { line: 2, .. }));
        assert!(err.to_string().contains("invalid UAV id '2.5'"));
    }

    #[test]
    fn wrong_field_count_fails() {
        let err = read("\n0 1 1\n").unwrap_err();
        assert!(matches!(err, FlightVizError::Parse { line: 2, .. }));
    }
}

// src/data_input/targets.rs
