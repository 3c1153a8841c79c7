//! Rank-based peak report.
//!
//! For each column the frames are ranked by value. The lowest and highest
//! `percent` of frames form the min and max bands, and runs of at least
//! `min_run` consecutive frames inside a band are reported as peaks.

use crate::error::Result;
use crate::instructions::column_name;
use crate::io::npy::MetricMatrix;
use crate::scores::FrameRange;
use crate::scores::extrema::collapse_runs;

pub const DEFAULT_PERCENT: f64 = 10.0;
pub const DEFAULT_MIN_RUN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PeakBand {
    /// Frame indices in ascending value order.
    pub indices: Vec<usize>,
    /// Values aligned with `indices`.
    pub values: Vec<f64>,
    /// Runs of consecutive frames long enough to count, ordered by start.
    pub peaks: Vec<FrameRange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPeaks {
    pub column: usize,
    pub name: String,
    pub min: PeakBand,
    pub max: PeakBand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilePeaks {
    pub file_name: String,
    pub columns: Vec<ColumnPeaks>,
}

/// Number of frames in each band: `len * percent / 100`, truncated and
/// clamped to `[0, len]`.
pub fn band_size(len: usize, percent: f64) -> usize {
    ((len as f64 * percent / 100.0) as usize).min(len)
}

pub fn column_peaks(column: usize, series: &[f64], percent: f64, min_run: usize) -> ColumnPeaks {
    let mut ranked: Vec<usize> = (0..series.len()).collect();
    // Stable, so equal values keep frame order.
    ranked.sort_by(|&a, &b| series[a].total_cmp(&series[b]));

    let k = band_size(series.len(), percent);
    ColumnPeaks {
        column,
        name: column_name(column).to_string(),
        min: band(series, &ranked[..k], min_run),
        max: band(series, &ranked[ranked.len() - k..], min_run),
    }
}

pub fn describe_peaks(
    file_name: &str,
    matrix: &MetricMatrix,
    percent: f64,
    min_run: usize,
) -> Result<FilePeaks> {
    let mut columns = Vec::with_capacity(matrix.cols);
    for col in 0..matrix.cols {
        let series = matrix.column(col)?;
        columns.push(column_peaks(col, &series, percent, min_run));
    }
    Ok(FilePeaks {
        file_name: file_name.to_string(),
        columns,
    })
}

fn band(series: &[f64], ranked: &[usize], min_run: usize) -> PeakBand {
    let mut frames = ranked.to_vec();
    frames.sort_unstable();
    let peaks = collapse_runs(&frames)
        .into_iter()
        .filter(|r| r.frame_count() >= min_run)
        .collect();
    PeakBand {
        indices: ranked.to_vec(),
        values: ranked.iter().map(|&i| series[i]).collect(),
        peaks,
    }
}
