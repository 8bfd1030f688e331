// src/constants.rs

use plotters::style::RGBColor;

// Sensor log layout.
pub const CHANNEL_COUNT: usize = 6;
pub const SAMPLE_RATE_HZ: f64 = 10.0; // Assumed, never checked against the data.

// Grid layout.
pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 2;
pub const MAX_FILES: usize = GRID_ROWS * GRID_COLS;

// Fixed y-axis range in raw ADC bits (10-bit converter).
pub const Y_AXIS_MIN: f64 = 0.0;
pub const Y_AXIS_MAX: f64 = 1023.0;

// Figure size in inches and output resolution.
pub const FIGURE_WIDTH_IN: f64 = 17.0;
pub const FIGURE_HEIGHT_IN: f64 = 12.0;
pub const OUTPUT_DPI: u32 = 300;

// Font sizes in points, converted to pixels by font_config.
pub const FONT_PT_MAIN_TITLE: u32 = 16;
pub const FONT_PT_CHART_TITLE: u32 = 12;
pub const FONT_PT_AXIS_DESC: u32 = 10;
pub const FONT_PT_TICK_LABEL: u32 = 9;
pub const FONT_PT_LEGEND: u32 = 10;
pub const FONT_PT_MESSAGE: u32 = 10;
pub const FONT_PT_ERROR_MESSAGE: u32 = 9;

// Stroke widths in points.
pub const LINE_WIDTH_PLOT_PT: u32 = 1;
pub const LINE_WIDTH_LEGEND_PT: u32 = 2;
pub const LINE_WIDTH_GRID_PT: u32 = 1;

// Dashed gridlines.
pub const GRID_ALPHA: f64 = 0.7;
pub const GRID_DASH_PT: u32 = 4;
pub const GRID_GAP_PT: u32 = 2;
pub const GRID_TARGET_TICKS: usize = 8;

// Layout rectangles as figure fractions: [left, bottom, right, top].
pub const LAYOUT_RECT_WITH_LEGEND: [f64; 4] = [0.03, 0.06, 0.97, 0.94];
pub const LAYOUT_RECT_NO_LEGEND: [f64; 4] = [0.03, 0.02, 0.97, 0.94];
pub const LEGEND_ANCHOR_Y: f64 = 0.01; // Legend baseline above the bottom edge.

// Maximum characters of an unexpected error shown on a subplot.
pub const ERROR_MESSAGE_MAX_CHARS: usize = 100;

// --- Plot Color Assignments ---
// matplotlib tab10, first six entries, one per channel.
pub const CHANNEL_COLORS: [RGBColor; CHANNEL_COUNT] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
];
pub const COLOR_GRID: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);
pub const COLOR_MESSAGE: RGBColor = RGBColor(0x00, 0x00, 0x00);

// --- Text ---
pub const FIGURE_TITLE: &str = "OpenCR Sensor Data Comparison";
pub const X_AXIS_LABEL: &str = "Time (s)";
pub const Y_AXIS_LABEL: &str = "Value (bits)";
pub const OUTPUT_FILENAME: &str = "sensor_plots.png";

// Files looked up next to the executable on a direct run, in plot order.
pub const DEFAULT_SENSOR_FILES: [&str; MAX_FILES] = [
    "new_opencr_sensor1.csv",
    "new_opencr_sensor2.csv",
    "old_opencr_sensor1.csv",
    "old_opencr_sensor2.csv",
];

// src/constants.rs
