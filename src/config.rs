//! Plotter configuration.

use std::path::PathBuf;

use crate::constants::{
    FIGURE_HEIGHT_IN, FIGURE_TITLE, FIGURE_WIDTH_IN, OUTPUT_DPI, OUTPUT_FILENAME, SAMPLE_RATE_HZ,
};

/// Values consumed by the grid plotter. `Default` is the fixed production setup;
/// library callers only override the output path.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Where the PNG is written
    pub output_path: PathBuf,
    /// Rows per second used to build the time axis
    pub sample_rate_hz: f64,
    /// Figure-level title
    pub figure_title: String,
    pub dpi: u32,
    pub width_in: f64,
    pub height_in: f64,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(OUTPUT_FILENAME),
            sample_rate_hz: SAMPLE_RATE_HZ,
            figure_title: FIGURE_TITLE.to_string(),
            dpi: OUTPUT_DPI,
            width_in: FIGURE_WIDTH_IN,
            height_in: FIGURE_HEIGHT_IN,
        }
    }
}

impl PlotterConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Bitmap size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }
}
