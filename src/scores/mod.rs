use std::fmt;

pub mod describe;
pub mod extrema;
pub mod peaks;
pub mod record;

pub use extrema::{ExtremalRanges, Sample, Thresholds, collapse_runs, find_ranges_by_threshold};
pub use record::{SCALE, build_record, format_ranges, scale_series};

/// Inclusive, 0-based run of frame indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRange {
    pub start: usize,
    pub end: usize,
}

impl FrameRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn frame_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

impl fmt::Display for FrameRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub column: usize,
    pub name: String,
    pub max: f64,
    pub min: f64,
    pub median: f64,
    pub mean: f64,
}

#[derive(Debug, Clone)]
pub struct FileColumnStats {
    pub file_name: String,
    pub columns: Vec<ColumnStats>,
}
