// src/plot_functions/plot_flight_paths.rs

use log::{info, warn};
use plotters::style::RGBColor;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{
    ARROW_LENGTH, ARROW_STRIDE, DEFAULT_COMMANDS_FILE, DEFAULT_COMMANDS_SUBDIR, PLOT_TITLE,
    X_AXIS_LABEL, X_LIMITS, Y_AXIS_LABEL, Y_LIMITS,
};
use crate::data_input::discovery::{discover_uav_ids, uav_log_path};
use crate::data_input::flight_log::{load_uav_file, FlightLog};
use crate::data_input::targets::load_final_targets;
use crate::plot_framework::{
    categorical_color, draw_flight_plot, FlightPlotConfig, HeadingArrow, TrackSeries,
};
use crate::types::{Position, UavId};

/// Default command file location: `<data_dir>/src/SimCmds.txt`.
pub fn default_commands_path(data_dir: &Path) -> PathBuf {
    data_dir
        .join(DEFAULT_COMMANDS_SUBDIR)
        .join(DEFAULT_COMMANDS_FILE)
}

/// Sample indices that get a heading arrow: 0 and every `ARROW_STRIDE`-th after it.
pub fn arrow_sample_indices(sample_count: usize) -> impl Iterator<Item = usize> {
    (0..sample_count).step_by(ARROW_STRIDE)
}

/// Builds the drawable track for one UAV from its log.
pub fn build_track(
    uav_id: UavId,
    color: RGBColor,
    log: &FlightLog,
    target: Option<Position>,
) -> TrackSeries {
    let arrows = arrow_sample_indices(log.len())
        .map(|i| HeadingArrow::from_azimuth((log.xs[i], log.ys[i]), log.azimuths_deg[i], ARROW_LENGTH))
        .collect();
    TrackSeries {
        uav_id,
        label: format!("UAV {uav_id}"),
        color,
        path: log.points().collect(),
        arrows,
        target,
    }
}

/// Discovers the UAV logs in `data_dir`, loads them with the targets from
/// `commands_path`, and returns the plot model in ascending UAV id order.
pub fn build_flight_paths_config(
    data_dir: &Path,
    commands_path: &Path,
) -> Result<FlightPlotConfig, Box<dyn Error>> {
    let uav_ids = discover_uav_ids(data_dir)?;
    info!(
        "Found {} UAV logs in '{}'",
        uav_ids.len(),
        data_dir.display()
    );

    let final_targets = load_final_targets(commands_path)?;
    info!(
        "Loaded {} final targets from '{}'",
        final_targets.len(),
        commands_path.display()
    );

    let mut tracks = Vec::with_capacity(uav_ids.len());
    for (index, &uav_id) in uav_ids.iter().enumerate() {
        let color = categorical_color(index, uav_ids.len());
        let log_path = uav_log_path(data_dir, uav_id);
        let log = load_uav_file(&log_path)?;
        if log.is_empty() {
            warn!(
                "UAV {uav_id}: '{}' has no samples after the header, leaving it out of the plot",
                log_path.display()
            );
            continue;
        }
        tracks.push(build_track(
            uav_id,
            color,
            &log,
            final_targets.get(&uav_id).copied(),
        ));
    }

    Ok(FlightPlotConfig {
        title: PLOT_TITLE.to_string(),
        x_range: X_LIMITS.0..X_LIMITS.1,
        y_range: Y_LIMITS.0..Y_LIMITS.1,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        tracks,
    })
}

/// Generates the flight path plot for every UAV log in `data_dir`.
pub fn plot_flight_paths(
    data_dir: &Path,
    commands_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let config = build_flight_paths_config(data_dir, commands_path)?;
    draw_flight_plot(output_path, &config)?;
    println!(
        "  Flight path plot with {} UAVs saved as '{}'.",
        config.tracks.len(),
        output_path.display()
    );
    Ok(())
}


// src/plot_functions/plot_flight_paths.rs
