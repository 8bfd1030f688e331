// src/plot_functions/mod.rs

pub mod plot_sensor_grid;

// src/plot_functions/mod.rs
