// src/font_config.rs

// Global font style constants for plot rendering.
// Sizes are specified in points and rendered at the fixed output DPI, so every
// pixel size in the figure is derived here.

use crate::constants::{
    FONT_PT_AXIS_DESC, FONT_PT_CHART_TITLE, FONT_PT_ERROR_MESSAGE, FONT_PT_LEGEND,
    FONT_PT_MAIN_TITLE, FONT_PT_MESSAGE, FONT_PT_TICK_LABEL, OUTPUT_DPI,
};

/// Points per inch.
const POINTS_PER_INCH: u32 = 72;

/// Font family name for default system fonts
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

/// Converts a point size to pixels at `dpi`, rounded to the nearest pixel.
pub const fn pt_to_px_at(pt: u32, dpi: u32) -> u32 {
    (pt * dpi + POINTS_PER_INCH / 2) / POINTS_PER_INCH
}

/// Converts a point size to pixels at the output DPI.
pub const fn pt_to_px(pt: u32) -> u32 {
    pt_to_px_at(pt, OUTPUT_DPI)
}

/// Represents a font style (family + pixel size) for consistent usage throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    pub family: &'static str,
    pub size_px: u32,
}

impl FontStyle {
    pub const fn system(pt: u32) -> Self {
        Self {
            family: FONT_FAMILY_SYSTEM,
            size_px: pt_to_px(pt),
        }
    }

    /// Tuple form accepted by plotters' `IntoFont`.
    pub fn tuple(self) -> (&'static str, f64) {
        (self.family, self.size_px as f64)
    }
}

pub const FONT_MAIN_TITLE: FontStyle = FontStyle::system(FONT_PT_MAIN_TITLE);
pub const FONT_CHART_TITLE: FontStyle = FontStyle::system(FONT_PT_CHART_TITLE);
pub const FONT_AXIS_DESC: FontStyle = FontStyle::system(FONT_PT_AXIS_DESC);
pub const FONT_TICK_LABEL: FontStyle = FontStyle::system(FONT_PT_TICK_LABEL);
pub const FONT_LEGEND: FontStyle = FontStyle::system(FONT_PT_LEGEND);
pub const FONT_MESSAGE: FontStyle = FontStyle::system(FONT_PT_MESSAGE);
pub const FONT_ERROR_MESSAGE: FontStyle = FontStyle::system(FONT_PT_ERROR_MESSAGE);
