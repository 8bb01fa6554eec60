// src/errors.rs

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::UavId;

pub type Result<T> = std::result::Result<T, FlightVizError>;

#[derive(Error, Debug)]
pub enum FlightVizError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("missing key in '{}': {key}", .path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("invalid simulation parameters: {0}")]
    InvalidParams(String),

    #[error("command targets UAV {id} but only {count} UAVs are simulated")]
    UnknownUav { id: UavId, count: usize },
}

pub fn io_error(path: &Path, source: std::io::Error) -> FlightVizError {
    FlightVizError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn parse_error(path: &Path, line: usize, reason: impl ToString) -> FlightVizError {
    FlightVizError::Parse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

// src/errors.rs
