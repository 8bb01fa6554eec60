// src/lib.rs - Library interface for the loaders, simulator and plot modules

pub mod constants;
pub mod data_input;
pub mod errors;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod simulation;
pub mod types;

// Expose crate version, preferring a git-derived semver when the build provides one.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
