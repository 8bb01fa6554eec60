// src/constants.rs

use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Plot dimensions. The title band is taken off the height so the chart area stays square.
pub const PLOT_HEIGHT: u32 = 1000;
pub const TITLE_BAND_PX: u32 = 40;
pub const PLOT_WIDTH: u32 = PLOT_HEIGHT - TITLE_BAND_PX;
pub const CHART_MARGIN_PX: i32 = 15;
pub const AXIS_LABEL_AREA_PX: i32 = 60;

// Fixed view window in meters. Both spans are equal for a 1:1 aspect.
pub const X_LIMITS: (f64, f64) = (-100.0, 180.0);
pub const Y_LIMITS: (f64, f64) = (-100.0, 180.0);

pub const PLOT_TITLE: &str = "UAV Flight Paths";
pub const X_AXIS_LABEL: &str = "X Position (m)";
pub const Y_AXIS_LABEL: &str = "Y Position (m)";

// Heading arrows along each path.
pub const ARROW_LENGTH: f64 = 5.0;
pub const ARROW_STRIDE: usize = 20;
pub const ARROW_HEAD_WIDTH: f64 = 2.0;
pub const ARROW_HEAD_LENGTH: f64 = 2.0;

// Target label sits this many meters below the target marker.
pub const TARGET_LABEL_OFFSET: f64 = 5.0;

// Marker sizes in pixels
pub const MARKER_SIZE_START: i32 = 7;
pub const MARKER_SIZE_END: i32 = 7;
pub const MARKER_SIZE_TARGET: i32 = 8;

pub const COLOR_TARGET: &RGBColor = &BLACK;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_MARKER: u32 = 2;
pub const LINE_WIDTH_TARGET: u32 = 3;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 26;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_ANNOTATION: i32 = 12;

// Input and output file names relative to the data directory.
pub const UAV_FILE_PREFIX: &str = "UAV";
pub const UAV_FILE_SUFFIX: &str = ".txt";
pub const DEFAULT_COMMANDS_SUBDIR: &str = "src";
pub const DEFAULT_COMMANDS_FILE: &str = "SimCmds.txt";
pub const DEFAULT_PLOT_FILE: &str = "UAV_FlightPaths.png";

// Simulation
pub const SIM_LOG_HEADER: &str = "time x y azimuth";
pub const ORBIT_CAPTURE_TOLERANCE: f64 = 0.5; // meters beyond the turn radius

// src/constants.rs
