// src/data_input/sensor_data.rs

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::constants::CHANNEL_COUNT;

/// Cleaned contents of one sensor log.
///
/// `samples` holds one row per retained input row and one column per channel.
/// Row `k` was sampled at `k / sample_rate` seconds; the original row position
/// in the file is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorLog {
    pub samples: Array2<f64>,
    pub dropped_rows: usize, // Rows rejected for a missing or non-numeric channel.
    pub widest_row: usize,   // Field count of the widest raw row.
}

impl SensorLog {
    pub fn from_rows(
        rows: Vec<[f64; CHANNEL_COUNT]>,
        dropped_rows: usize,
        widest_row: usize,
    ) -> Self {
        let mut samples = Array2::zeros((rows.len(), CHANNEL_COUNT));
        for (mut dst, src) in samples.axis_iter_mut(Axis(0)).zip(rows.iter()) {
            dst.assign(&ArrayView1::from(&src[..]));
        }
        Self {
            samples,
            dropped_rows,
            widest_row,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows read from the file before cleaning.
    pub fn total_rows(&self) -> usize {
        self.len() + self.dropped_rows
    }

    /// Time in seconds of the `k`-th retained sample.
    pub fn time_at(k: usize, sample_rate_hz: f64) -> f64 {
        k as f64 / sample_rate_hz
    }

    pub fn time_axis(&self, sample_rate_hz: f64) -> Array1<f64> {
        (0..self.len())
            .map(|k| Self::time_at(k, sample_rate_hz))
            .collect()
    }

    /// Time of the last sample, or 0.0 for an empty log.
    pub fn duration_s(&self, sample_rate_hz: f64) -> f64 {
        self.len()
            .checked_sub(1)
            .map_or(0.0, |last| Self::time_at(last, sample_rate_hz))
    }

    pub fn channel(&self, index: usize) -> ArrayView1<'_, f64> {
        self.samples.column(index)
    }

    /// (time, value) points of one channel.
    pub fn channel_series(&self, index: usize, sample_rate_hz: f64) -> Vec<(f64, f64)> {
        self.channel(index)
            .iter()
            .enumerate()
            .map(|(k, &value)| (Self::time_at(k, sample_rate_hz), value))
            .collect()
    }
}
