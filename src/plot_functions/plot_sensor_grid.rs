// src/plot_functions/plot_sensor_grid.rs

use log::{error, info, warn};
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::channel_names::{channel_color, channel_label};
use crate::config::PlotterConfig;
use crate::constants::{
    CHANNEL_COUNT, LINE_WIDTH_PLOT_PT, MAX_FILES, X_AXIS_LABEL, Y_AXIS_LABEL, Y_AXIS_MAX,
    Y_AXIS_MIN,
};
use crate::data_input::sensor_data::SensorLog;
use crate::data_input::sensor_parser::load_sensor_log;
use crate::error::SensorFileError;
use crate::font_config::{pt_to_px_at, FONT_ERROR_MESSAGE, FONT_MESSAGE};
use crate::plot_framework::{draw_grid_figure, LegendEntry, PanelConfig, PanelContent, PlotSeries};

/// Everything needed to render the figure, built before any drawing happens.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGrid {
    pub panels: Vec<PanelConfig>,
    /// Present when at least one panel plotted data.
    pub legend: Option<Vec<LegendEntry>>,
    /// Inputs past the fourth that were ignored.
    pub files_dropped: usize,
}

impl SensorGrid {
    pub fn plotted_count(&self) -> usize {
        self.panels.iter().filter(|p| p.has_data()).count()
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    pub output_path: PathBuf,
    pub panels_total: usize,
    pub panels_plotted: usize,
    pub legend_drawn: bool,
}

/// One legend entry per channel, in channel order.
pub fn channel_legend() -> Vec<LegendEntry> {
    (0..CHANNEL_COUNT)
        .map(|channel| LegendEntry {
            label: channel_label(channel).to_string(),
            color: channel_color(channel),
        })
        .collect()
}

/// Six line series, one per channel, against the implicit time axis.
pub fn channel_series(log: &SensorLog, config: &PlotterConfig) -> Vec<PlotSeries> {
    let stroke_width = pt_to_px_at(LINE_WIDTH_PLOT_PT, config.dpi);
    (0..CHANNEL_COUNT)
        .map(|channel| PlotSeries {
            data: log.channel_series(channel, config.sample_rate_hz),
            label: channel_label(channel).to_string(),
            color: channel_color(channel),
            stroke_width,
        })
        .collect()
}

fn decorated_panel(title: &str, x_max: f64, content: PanelContent) -> PanelConfig {
    PanelConfig {
        title: title.to_string(),
        x_range: 0.0..x_max,
        y_range: Y_AXIS_MIN..Y_AXIS_MAX,
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
        content,
    }
}

/// Logs a per-file failure the way its category asks for.
fn report_file_error(path: &Path, err: &SensorFileError) {
    match err {
        SensorFileError::Unreadable => {
            warn!("File '{}' is empty or could not be parsed.", path.display())
        }
        SensorFileError::InsufficientColumns { .. } => {
            info!("File '{}' - {}. No valid data rows.", path.display(), err)
        }
        SensorFileError::NoValidRows => info!(
            "No valid {CHANNEL_COUNT}-column numeric data rows found in '{}' after cleaning.",
            path.display()
        ),
        SensorFileError::Io(_) | SensorFileError::Csv(_) => {
            error!("Error processing file '{}': {}", path.display(), err)
        }
    }
}

/// Per-file cleaning summary logged after a successful load.
fn rows_kept_summary(path: &Path, log: &SensorLog) -> String {
    format!(
        "'{}': kept {} of {} rows ({} dropped, widest row {} fields).",
        path.display(),
        log.len(),
        log.total_rows(),
        log.dropped_rows,
        log.widest_row
    )
}

/// Builds the panel for one file. Never fails: every error becomes an annotation.
pub fn build_sensor_panel(title: &str, path: &Path, config: &PlotterConfig) -> PanelConfig {
    match load_sensor_log(path) {
        Ok(log) => {
            info!("{}", rows_kept_summary(path, &log));
            // At least one sample period wide so a single sample still has an x range.
            let x_max = log
                .duration_s(config.sample_rate_hz)
                .max(1.0 / config.sample_rate_hz);
            decorated_panel(title, x_max, PanelContent::Series(channel_series(&log, config)))
        }
        Err(err) => {
            report_file_error(path, &err);
            let font = if err.is_unexpected() {
                FONT_ERROR_MESSAGE
            } else {
                FONT_MESSAGE
            };
            decorated_panel(
                title,
                1.0,
                PanelContent::Annotation {
                    message: err.annotation(),
                    font,
                },
            )
        }
    }
}

/// Reads each file and builds its panel. Uses at most the first four entries.
///
/// Returns `None` when `files` is empty.
pub fn prepare_sensor_grid(
    files: &[(String, PathBuf)],
    config: &PlotterConfig,
) -> Option<SensorGrid> {
    if files.is_empty() {
        info!("No files provided to plot.");
        return None;
    }

    let files_dropped = files.len().saturating_sub(MAX_FILES);
    if files_dropped > 0 {
        warn!(
            "More than {MAX_FILES} files provided. Only the first {MAX_FILES} will be plotted in a 2x2 grid."
        );
    }

    let panels: Vec<PanelConfig> = files
        .iter()
        .take(MAX_FILES)
        .map(|(title, path)| build_sensor_panel(title, path, config))
        .collect();

    let legend = panels.iter().any(PanelConfig::has_data).then(channel_legend);

    Some(SensorGrid {
        panels,
        legend,
        files_dropped,
    })
}

/// Plots up to four sensor logs in a 2x2 grid and saves the figure.
///
/// `files` is an ordered list of (subplot title, CSV path). Per-file problems are
/// shown on that file's subplot; only a failure to write the image is returned
/// as an error.
pub fn plot_sensor_data_from_csvs(
    files: &[(String, PathBuf)],
    config: &PlotterConfig,
) -> Result<Option<GridSummary>, Box<dyn Error>> {
    let Some(grid) = prepare_sensor_grid(files, config) else {
        return Ok(None);
    };

    draw_grid_figure(config, &grid.panels, grid.legend.as_deref())?;
    info!("Figure saved as '{}'.", config.output_path.display());

    Ok(Some(GridSummary {
        output_path: config.output_path.clone(),
        panels_total: grid.panels.len(),
        panels_plotted: grid.plotted_count(),
        legend_drawn: grid.legend.is_some(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> (String, PathBuf) {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        (name.to_string(), path)
    }

    #[test]
    fn test_clean_file_gives_six_series() {
        let dir = tempfile::tempdir().unwrap();
        let (title, path) = write_csv(&dir, "a.csv", "1,2,3,4,5,6\n7,8,9,10,11,12\n");
        let panel = build_sensor_panel(&title, &path, &PlotterConfig::default());

        assert!(panel.has_data());
        assert_eq!(panel.series().len(), 6);
        assert_eq!(panel.series()[0].data, vec![(0.0, 1.0), (0.1, 7.0)]);
        assert_eq!(panel.x_range, 0.0..0.1);
        assert_eq!(panel.y_range, 0.0..1023.0);
        assert_eq!(panel.title, "a.csv");
    }

    #[test]
    fn test_single_sample_has_nonempty_x_range() {
        let dir = tempfile::tempdir().unwrap();
        let (title, path) = write_csv(&dir, "one.csv", "1,2,3,4,5,6\n");
        let panel = build_sensor_panel(&title, &path, &PlotterConfig::default());
        assert_eq!(panel.x_range, 0.0..0.1);
    }

    #[test]
    fn test_missing_file_becomes_error_annotation() {
        let panel = build_sensor_panel(
            "gone.csv",
            Path::new("/nonexistent/gone.csv"),
            &PlotterConfig::default(),
        );
        assert!(!panel.has_data());
        let message = panel.annotation().unwrap();
        assert!(message.starts_with("Error processing file:\n"));
        assert_eq!(panel.x_label, "Time (s)");
        assert_eq!(panel.y_label, "Value (bits)");
    }

    #[test]
    fn test_channel_legend_order() {
        let legend = channel_legend();
        let labels: Vec<&str> = legend.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1", "2", "3", "4", "5"]);
        assert_eq!(legend[3].color, channel_color(3));
    }

    #[test]
    fn test_rows_kept_summary_reports_widest_row() {
        let log = SensorLog::from_rows(vec![[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]], 2, 8);
        assert_eq!(
            rows_kept_summary(Path::new("s.csv"), &log),
            "'s.csv': kept 1 of 3 rows (2 dropped, widest row 8 fields)."
        );
    }

    #[test]
    fn test_empty_input_prepares_nothing() {
        assert!(prepare_sensor_grid(&[], &PlotterConfig::default()).is_none());
    }
}
