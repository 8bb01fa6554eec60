// src/plot_functions/mod.rs

pub mod plot_flight_paths;

// src/plot_functions/mod.rs
