// src/types.rs
// Shared type aliases

use std::collections::BTreeMap;

/// UAV identifier, taken from the `UAV<id>.txt` file name or the command file.
/// Signed, so `UAV-1.txt` and a `-1` command id are read like any other integer.
pub type UavId = i64;

/// Planar position in meters.
pub type Position = (f64, f64);

/// Final target per UAV. Keys iterate in ascending id order.
pub type TargetMap = BTreeMap<UavId, Position>;

// src/types.rs
