// src/data_input/mod.rs

pub mod sensor_data;
pub mod sensor_parser;

// src/data_input/mod.rs
