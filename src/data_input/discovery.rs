// src/data_input/discovery.rs

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{UAV_FILE_PREFIX, UAV_FILE_SUFFIX};
use crate::errors::{io_error, Result};
use crate::types::UavId;

/// Extracts the id from a `UAV<id>.txt` file name.
pub fn parse_uav_file_name(file_name: &str) -> Option<UavId> {
    file_name
        .strip_prefix(UAV_FILE_PREFIX)?
        .strip_suffix(UAV_FILE_SUFFIX)?
        .parse::<UavId>()
        .ok()
}

/// Path of the flight log for `uav_id` inside `data_dir`.
pub fn uav_log_path(data_dir: &Path, uav_id: UavId) -> PathBuf {
    data_dir.join(format!("{UAV_FILE_PREFIX}{uav_id}{UAV_FILE_SUFFIX}"))
}

/// Finds every `UAV<id>.txt` file in `dir` and returns the ids in ascending order.
///
/// Names that do not match are skipped. The returned order does not depend on the
/// order the filesystem lists entries in.
pub fn discover_uav_ids(dir: &Path) -> Result<Vec<UavId>> {
    let mut ids = Vec::new();
    for entry_result in fs::read_dir(dir).map_err(|e| io_error(dir, e))? {
        let entry = entry_result.map_err(|e| io_error(dir, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        match parse_uav_file_name(name) {
            Some(id) => ids.push(id),
            None if name.starts_with(UAV_FILE_PREFIX) => {
                debug!("Skipping '{name}': not a UAV<id>{UAV_FILE_SUFFIX} log");
            }
            None => {}
        }
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}


// src/data_input/discovery.rs
