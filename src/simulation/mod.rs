// src/simulation/mod.rs

pub mod engine;
pub mod uav;

// src/simulation/mod.rs
