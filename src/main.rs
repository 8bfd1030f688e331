// src/main.rs

use log::error;
use std::error::Error;

use opencr_sensor_plot::config::PlotterConfig;
use opencr_sensor_plot::discovery::{default_sensor_files, existing_sensor_files, program_dir};
use opencr_sensor_plot::logging::init_logging;
use opencr_sensor_plot::plot_functions::plot_sensor_grid::plot_sensor_data_from_csvs;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    // The logs are expected next to the executable.
    let candidates = default_sensor_files(&program_dir());
    let existing_files = existing_sensor_files(candidates);

    if existing_files.is_empty() {
        error!("None of the specified CSV files were found. Please check the file paths.");
        return Ok(());
    }

    plot_sensor_data_from_csvs(&existing_files, &PlotterConfig::default())?;
    Ok(())
}
