// src/plot_framework.rs

use log::error;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::config::PlotterConfig;
use crate::constants::{
    COLOR_GRID, COLOR_MESSAGE, ERROR_MESSAGE_MAX_CHARS, GRID_ALPHA, GRID_COLS, GRID_DASH_PT,
    GRID_GAP_PT, GRID_ROWS, GRID_TARGET_TICKS, LAYOUT_RECT_NO_LEGEND, LAYOUT_RECT_WITH_LEGEND,
    LEGEND_ANCHOR_Y, LINE_WIDTH_GRID_PT, LINE_WIDTH_LEGEND_PT,
};
use crate::error::truncate_message;
use crate::font_config::{
    pt_to_px_at, FontStyle, FONT_AXIS_DESC, FONT_CHART_TITLE, FONT_ERROR_MESSAGE, FONT_LEGEND,
    FONT_MAIN_TITLE, FONT_TICK_LABEL,
};

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

// Panel spacing in points.
const PANEL_MARGIN_PT: u32 = 8;
const X_LABEL_AREA_PT: u32 = 28;
const Y_LABEL_AREA_PT: u32 = 36;

// Legend geometry as multiples of the legend font size.
const LEGEND_HANDLE_EM: f64 = 2.0;
const LEGEND_HANDLE_PAD_EM: f64 = 0.8;
const LEGEND_COLUMN_SPACING_EM: f64 = 2.0;
const CHAR_WIDTH_RATIO: f64 = 0.6; // Approximate glyph width relative to font size

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// What a panel shows inside its axes.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelContent {
    Series(Vec<PlotSeries>),
    /// Centered message in place of data. Lines are separated by `\n`.
    Annotation { message: String, font: FontStyle },
}

/// One cell of the grid. Decoration (title, labels, ranges, grid) is drawn
/// whatever the content.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub x_label: String,
    pub y_label: String,
    pub content: PanelContent,
}

impl PanelConfig {
    /// True when at least one series carries points.
    pub fn has_data(&self) -> bool {
        match &self.content {
            PanelContent::Series(series) => series.iter().any(|s| !s.data.is_empty()),
            PanelContent::Annotation { .. } => false,
        }
    }

    pub fn series(&self) -> &[PlotSeries] {
        match &self.content {
            PanelContent::Series(series) => series,
            PanelContent::Annotation { .. } => &[],
        }
    }

    pub fn annotation(&self) -> Option<&str> {
        match &self.content {
            PanelContent::Annotation { message, .. } => Some(message),
            PanelContent::Series(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: RGBColor,
}

/// Evenly spaced "nice" (1, 2 or 5 times a power of ten) positions inside `range`.
pub fn grid_ticks(range: &Range<f64>, target_count: usize) -> Vec<f64> {
    let span = range.end - range.start;
    if !span.is_finite() || span <= 0.0 || target_count == 0 {
        return Vec::new();
    }
    let raw_step = span / target_count as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = nice * magnitude;

    let tolerance = step * 1e-9;
    let mut ticks = Vec::new();
    let mut k = (range.start / step).ceil();
    loop {
        let value = k * step;
        if value > range.end + tolerance {
            break;
        }
        ticks.push(value);
        k += 1.0;
    }
    ticks
}

/// Axis tick text: up to two decimals, trailing zeros removed.
pub fn format_tick_label(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pixel margins (top, bottom, left, right) for a layout rectangle given as
/// figure fractions `[left, bottom, right, top]`.
pub fn layout_margins(size: (u32, u32), rect: [f64; 4]) -> (i32, i32, i32, i32) {
    let (width, height) = (size.0 as f64, size.1 as f64);
    let [left, bottom, right, top] = rect;
    (
        ((1.0 - top) * height).round() as i32,
        (bottom * height).round() as i32,
        (left * width).round() as i32,
        ((1.0 - right) * width).round() as i32,
    )
}

/// Draws centered, possibly multi-line text on an area.
fn draw_centered_message(
    area: &Area,
    message: &str,
    font: FontStyle,
) -> Result<(), Box<dyn Error>> {
    const LINE_SPACING: f64 = 1.3;

    let (width, height) = area.dim_in_pixel();
    let lines: Vec<&str> = message.split('\n').collect();
    let line_height = font.size_px as f64 * LINE_SPACING;
    let first_line_y = height as f64 / 2.0 - line_height * (lines.len() as f64 - 1.0) / 2.0;

    let style = font
        .tuple()
        .into_font()
        .color(&COLOR_MESSAGE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (i, line) in lines.iter().enumerate() {
        let y = (first_line_y + i as f64 * line_height).round() as i32;
        area.draw(&Text::new(*line, (width as i32 / 2, y), style.clone()))?;
    }
    Ok(())
}

/// Dashed gridlines at reduced opacity across the whole plotting area.
fn draw_dashed_grid(
    chart: &mut Chart,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
    dpi: u32,
) -> Result<(), Box<dyn Error>> {
    let style = COLOR_GRID
        .mix(GRID_ALPHA)
        .stroke_width(pt_to_px_at(LINE_WIDTH_GRID_PT, dpi));
    let dash = pt_to_px_at(GRID_DASH_PT, dpi) as i32;
    let gap = pt_to_px_at(GRID_GAP_PT, dpi) as i32;

    for x in grid_ticks(x_range, GRID_TARGET_TICKS) {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, y_range.start), (x, y_range.end)],
            dash,
            gap,
            style,
        ))?;
    }
    for y in grid_ticks(y_range, GRID_TARGET_TICKS) {
        chart.draw_series(DashedLineSeries::new(
            vec![(x_range.start, y), (x_range.end, y)],
            dash,
            gap,
            style,
        ))?;
    }
    Ok(())
}

/// Draws one panel: axes, labels, grid, then either series or an annotation.
fn draw_panel(area: &Area, panel: &PanelConfig, dpi: u32) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, FONT_CHART_TITLE.tuple())
        .margin(pt_to_px_at(PANEL_MARGIN_PT, dpi) as i32)
        .x_label_area_size(pt_to_px_at(X_LABEL_AREA_PT, dpi) as i32)
        .y_label_area_size(pt_to_px_at(Y_LABEL_AREA_PT, dpi) as i32)
        .build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .x_labels(GRID_TARGET_TICKS)
        .y_labels(GRID_TARGET_TICKS)
        .x_label_formatter(&|x| format_tick_label(*x))
        .y_label_formatter(&|y| format_tick_label(*y))
        .label_style(FONT_TICK_LABEL.tuple())
        .axis_desc_style(FONT_AXIS_DESC.tuple())
        .draw()?;

    draw_dashed_grid(&mut chart, &panel.x_range, &panel.y_range, dpi)?;

    match &panel.content {
        PanelContent::Series(series) => {
            // Clamp so lines leaving the fixed y range stay inside the axes.
            let (y_min, y_max) = (panel.y_range.start, panel.y_range.end);
            for s in series.iter().filter(|s| !s.data.is_empty()) {
                chart.draw_series(LineSeries::new(
                    s.data.iter().map(|&(x, y)| (x, y.clamp(y_min, y_max))),
                    s.color.stroke_width(s.stroke_width),
                ))?;
            }
        }
        PanelContent::Annotation { message, font } => {
            let plotting_area = chart.plotting_area().strip_coord_spec();
            draw_centered_message(&plotting_area, message, *font)?;
        }
    }
    Ok(())
}

/// Single row of legend entries centered horizontally around `center_y`.
fn draw_shared_legend(
    root: &Area,
    entries: &[LegendEntry],
    center_y: i32,
    dpi: u32,
) -> Result<(), Box<dyn Error>> {
    let font_px = FONT_LEGEND.size_px as f64;
    let handle = LEGEND_HANDLE_EM * font_px;
    let pad = LEGEND_HANDLE_PAD_EM * font_px;
    let spacing = LEGEND_COLUMN_SPACING_EM * font_px;
    let entry_widths: Vec<f64> = entries
        .iter()
        .map(|e| handle + pad + e.label.chars().count() as f64 * font_px * CHAR_WIDTH_RATIO)
        .collect();
    let total_width = entry_widths.iter().sum::<f64>()
        + spacing * entries.len().saturating_sub(1) as f64;

    let (width, _) = root.dim_in_pixel();
    let mut x = (width as f64 - total_width) / 2.0;
    let label_style = FONT_LEGEND
        .tuple()
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let stroke = pt_to_px_at(LINE_WIDTH_LEGEND_PT, dpi);

    for (entry, entry_width) in entries.iter().zip(entry_widths) {
        let x0 = x.round() as i32;
        let x1 = (x + handle).round() as i32;
        root.draw(&PathElement::new(
            vec![(x0, center_y), (x1, center_y)],
            entry.color.stroke_width(stroke),
        ))?;
        root.draw(&Text::new(
            entry.label.as_str(),
            ((x + handle + pad).round() as i32, center_y),
            label_style.clone(),
        ))?;
        x += entry_width + spacing;
    }
    Ok(())
}

/// Replaces a panel that failed to draw with its truncated error text.
fn draw_panel_error(area: &Area, message: &str) -> Result<(), Box<dyn Error>> {
    area.fill(&WHITE)?;
    draw_centered_message(
        area,
        &format!(
            "Error processing file:\n{}",
            truncate_message(message, ERROR_MESSAGE_MAX_CHARS)
        ),
        FONT_ERROR_MESSAGE,
    )
}

/// Runs `draw` on one grid cell. On failure the cell shows the error instead;
/// nothing is propagated so the other cells still get drawn.
fn draw_panel_with_fallback<F>(area: &Area, panel: &PanelConfig, draw: F)
where
    F: FnOnce(&Area, &PanelConfig) -> Result<(), Box<dyn Error>>,
{
    if let Err(e) = draw(area, panel) {
        let message = e.to_string();
        error!("Failed to draw subplot '{}': {}", panel.title, message);
        if let Err(e) = draw_panel_error(area, &message) {
            error!("Failed to annotate subplot '{}': {}", panel.title, e);
        }
    }
}

/// Renders a 2x2 grid figure to `config.output_path`.
///
/// `panels` fill the grid row by row; cells past the last panel stay blank.
/// A failure while drawing one panel replaces that panel with an error message
/// and the remaining panels are still drawn.
pub fn draw_grid_figure(
    config: &PlotterConfig,
    panels: &[PanelConfig],
    legend: Option<&[LegendEntry]>,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = config.pixel_size();
    let root_area = BitMapBackend::new(&config.output_path, (width, height)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let rect = if legend.is_some() {
        LAYOUT_RECT_WITH_LEGEND
    } else {
        LAYOUT_RECT_NO_LEGEND
    };
    let (top, bottom, left, right) = layout_margins((width, height), rect);

    root_area.draw(&Text::new(
        config.figure_title.as_str(),
        (width as i32 / 2, top / 2),
        FONT_MAIN_TITLE
            .tuple()
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let grid_area = root_area.margin(top, bottom, left, right);
    let sub_plot_areas = grid_area.split_evenly((GRID_ROWS, GRID_COLS));

    for (area, panel) in sub_plot_areas.iter().zip(panels) {
        draw_panel_with_fallback(area, panel, |area, panel| {
            draw_panel(area, panel, config.dpi)
        });
    }

    if let Some(entries) = legend {
        let legend_center_y = height as i32
            - (LEGEND_ANCHOR_Y * height as f64).round() as i32
            - FONT_LEGEND.size_px as i32;
        draw_shared_legend(&root_area, entries, legend_center_y, config.dpi)?;
    }

    root_area.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_config::FONT_MESSAGE;

    #[test]
    fn test_grid_ticks_for_adc_range() {
        assert_eq!(
            grid_ticks(&(0.0..1023.0), 8),
            vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]
        );
    }

    #[test]
    fn test_grid_ticks_small_span() {
        let ticks = grid_ticks(&(0.0..0.1), 8);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert!((ticks[5] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_grid_ticks_empty_range() {
        assert!(grid_ticks(&(1.0..1.0), 8).is_empty());
        assert!(grid_ticks(&(0.0..1.0), 0).is_empty());
    }

    #[test]
    fn test_format_tick_label() {
        assert_eq!(format_tick_label(200.0), "200");
        assert_eq!(format_tick_label(0.0), "0");
        assert_eq!(format_tick_label(0.30000000000000004), "0.3");
        assert_eq!(format_tick_label(2.25), "2.25");
        assert_eq!(format_tick_label(-0.001), "0");
    }

    #[test]
    fn test_layout_margins_with_legend() {
        let (top, bottom, left, right) = layout_margins((5100, 3600), LAYOUT_RECT_WITH_LEGEND);
        assert_eq!((top, bottom, left, right), (216, 216, 153, 153));
    }

    #[test]
    fn test_layout_margins_without_legend() {
        let (_, bottom, _, _) = layout_margins((5100, 3600), LAYOUT_RECT_NO_LEGEND);
        assert_eq!(bottom, 72);
    }

    #[test]
    fn test_annotation_panel_has_no_series() {
        let panel = PanelConfig {
            title: "a.csv".to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1023.0,
            x_label: "Time (s)".to_string(),
            y_label: "Value (bits)".to_string(),
            content: PanelContent::Annotation {
                message: "need 6 columns, got 4".to_string(),
                font: FONT_MESSAGE,
            },
        };
        assert!(!panel.has_data());
        assert!(panel.series().is_empty());
        assert_eq!(panel.annotation(), Some("need 6 columns, got 4"));
    }

    #[test]
    fn test_failed_panel_draw_is_contained() {
        let panel = PanelConfig {
            title: "broken.csv".to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1023.0,
            x_label: "Time (s)".to_string(),
            y_label: "Value (bits)".to_string(),
            content: PanelContent::Series(Vec::new()),
        };
        let (width, height) = (400u32, 300u32);
        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let area = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            area.fill(&BLACK).unwrap();
            draw_panel_with_fallback(&area, &panel, |_, _| Err("backend gave up".into()));
            area.present().unwrap();
        }
        // The failed cell is repainted white around the centered error text.
        assert_eq!(&buffer[..3], &[255, 255, 255]);
    }
}
