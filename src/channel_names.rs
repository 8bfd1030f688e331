/// Centralized channel naming utilities
///
/// Provides consistent legend labels and colors for the six analog channels
/// across every subplot of a run.
use plotters::style::RGBColor;

use crate::constants::{CHANNEL_COLORS, CHANNEL_COUNT};

/// Get the legend label for a given channel index
///
/// # Arguments
/// * `index` - Channel index (0..=5)
///
/// # Panics
/// Panics if index is greater than 5
pub fn channel_label(index: usize) -> &'static str {
    match CHANNEL_LABELS.get(index) {
        Some(label) => label,
        None => panic!(
            "Invalid channel index: {}. Expected 0 through {}",
            index,
            CHANNEL_COUNT - 1
        ),
    }
}

/// Get the palette color for a given channel index.
///
/// # Panics
/// Panics if index is greater than 5
pub fn channel_color(index: usize) -> RGBColor {
    match CHANNEL_COLORS.get(index) {
        Some(color) => *color,
        None => panic!(
            "Invalid channel index: {}. Expected 0 through {}",
            index,
            CHANNEL_COUNT - 1
        ),
    }
}

/// Get all channel labels as a static array
pub const CHANNEL_LABELS: [&str; CHANNEL_COUNT] = ["0", "1", "2", "3", "4", "5"];
