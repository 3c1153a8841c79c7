//! Threshold-based extremal range detection over a 1-D series.
//!
//! A frame belongs to the maxima band when its value is at least
//! `max_percentage * abs_max`, and to the minima band when it is at most
//! `abs_min + min_percentage * (abs_max - abs_min)`. The two predicates are
//! evaluated independently, so with generous percentages a frame may sit in
//! both bands.

use crate::error::{MetricFtError, Result};
use crate::scores::FrameRange;

pub const DEFAULT_MAX_PERCENTAGE: f64 = 0.8;
pub const DEFAULT_MIN_PERCENTAGE: f64 = 0.2;

/// Numeric sample accepted by the detector.
pub trait Sample: Copy + PartialOrd {
    fn as_f64(self) -> f64;
}

impl Sample for i64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for i32 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

impl Sample for f32 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub max_percentage: f64,
    pub min_percentage: f64,
}

impl Thresholds {
    pub fn new(max_percentage: f64, min_percentage: f64) -> Self {
        Self {
            max_percentage,
            min_percentage,
        }
    }

    pub fn in_unit_interval(&self) -> bool {
        (0.0..=1.0).contains(&self.max_percentage) && (0.0..=1.0).contains(&self.min_percentage)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PERCENTAGE, DEFAULT_MIN_PERCENTAGE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtremalRanges<T> {
    pub abs_max: T,
    pub abs_min: T,
    pub max_threshold: f64,
    pub min_threshold: f64,
    pub maxima: Vec<FrameRange>,
    /// Largest value inside each maxima range, aligned with `maxima`.
    pub maxima_values: Vec<T>,
    pub minima: Vec<FrameRange>,
    /// Smallest value inside each minima range, aligned with `minima`.
    pub minima_values: Vec<T>,
}

pub fn find_ranges_by_threshold<T: Sample>(
    series: &[T],
    thresholds: Thresholds,
) -> Result<ExtremalRanges<T>> {
    let (abs_min, abs_max) = min_max(series).ok_or(MetricFtError::EmptyInput)?;

    let hi = abs_max.as_f64();
    let lo = abs_min.as_f64();
    let max_threshold = thresholds.max_percentage * hi;
    let min_threshold = lo + thresholds.min_percentage * (hi - lo);

    let maxima_indices: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, v)| v.as_f64() >= max_threshold)
        .map(|(i, _)| i)
        .collect();
    let minima_indices: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, v)| v.as_f64() <= min_threshold)
        .map(|(i, _)| i)
        .collect();

    let maxima = collapse_runs(&maxima_indices);
    let minima = collapse_runs(&minima_indices);

    let maxima_values = maxima
        .iter()
        .filter_map(|r| min_max(&series[r.start..=r.end]).map(|(_, max)| max))
        .collect();
    let minima_values = minima
        .iter()
        .filter_map(|r| min_max(&series[r.start..=r.end]).map(|(min, _)| min))
        .collect();

    Ok(ExtremalRanges {
        abs_max,
        abs_min,
        max_threshold,
        min_threshold,
        maxima,
        maxima_values,
        minima,
        minima_values,
    })
}

/// Collapses ascending indices into maximal runs of consecutive values.
pub fn collapse_runs(indices: &[usize]) -> Vec<FrameRange> {
    let mut ranges = Vec::new();
    let Some((&first, rest)) = indices.split_first() else {
        return ranges;
    };

    let mut start = first;
    let mut prev = first;
    for &idx in rest {
        if idx != prev + 1 {
            ranges.push(FrameRange::new(start, prev));
            start = idx;
        }
        prev = idx;
    }
    ranges.push(FrameRange::new(start, prev));
    ranges
}

fn min_max<T: Sample>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    let mut min = first;
    let mut max = first;
    for &v in rest {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}
