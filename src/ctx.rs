use std::path::PathBuf;

use crate::input::SeriesFile;
use crate::instructions::{InstructionTable, MetricInstruction};
use crate::io::npy::MetricMatrix;
use crate::schema::v1::TrainingRecord;
use crate::scores::FileColumnStats;
use crate::scores::extrema::Thresholds;
use crate::scores::peaks::{DEFAULT_MIN_RUN, DEFAULT_PERCENT, FilePeaks};

/// Minimum width of a metric array once instruction records are built.
pub const MIN_COLUMNS: usize = 16;
pub const COMBINED_OUTPUT: &str = "combined_output.json";
pub const DESCRIBE_OUTPUT: &str = "metrics_output.txt";

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub json_path: PathBuf,
    pub json_path_explicit: bool,
    pub describe_path: PathBuf,
    pub peaks_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakParams {
    pub percent: f64,
    pub min_run: usize,
}

#[derive(Debug)]
pub struct Ctx {
    pub input_dir: PathBuf,
    pub thresholds: Thresholds,
    pub metric_filter: Option<u32>,
    pub instructions_path: Option<PathBuf>,
    pub threads: usize,
    pub files: Vec<SeriesFile>,
    pub instructions: Option<InstructionTable>,
    pub matrices: Vec<MetricMatrix>,
    pub records: Vec<TrainingRecord>,
    pub column_stats: Vec<FileColumnStats>,
    pub peak_params: PeakParams,
    pub peaks: Vec<FilePeaks>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(input_dir: PathBuf, thresholds: Thresholds) -> Self {
        let describe_path = input_dir.join(DESCRIBE_OUTPUT);
        Self {
            input_dir,
            thresholds,
            metric_filter: None,
            instructions_path: None,
            threads: 0,
            files: Vec::new(),
            instructions: None,
            matrices: Vec::new(),
            records: Vec::new(),
            column_stats: Vec::new(),
            peak_params: PeakParams {
                percent: DEFAULT_PERCENT,
                min_run: DEFAULT_MIN_RUN,
            },
            peaks: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                json_path: PathBuf::from(COMBINED_OUTPUT),
                json_path_explicit: false,
                describe_path,
                peaks_path: None,
            },
        }
    }

    pub fn with_metric(mut self, id: Option<u32>) -> Self {
        self.metric_filter = id;
        self
    }

    pub fn with_json_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.output.json_path = path;
            self.output.json_path_explicit = true;
        }
        self
    }

    pub fn with_describe_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.output.describe_path = path;
        }
        self
    }

    pub fn with_peaks(mut self, percent: f64, min_run: usize, out: Option<PathBuf>) -> Self {
        self.peak_params = PeakParams { percent, min_run };
        self.output.peaks_path = out;
        self
    }

    /// Columns a matrix needs so that every selected metric can be read.
    /// Without an instruction table any width is accepted.
    pub fn required_columns(&self) -> usize {
        let Some(table) = self.instructions.as_ref() else {
            return 0;
        };
        let referenced = table.max_column().map(|c| c + 1).unwrap_or(0);
        referenced.max(MIN_COLUMNS)
    }
}

pub fn single_metric_output(entry: &MetricInstruction) -> PathBuf {
    PathBuf::from(format!(
        "output_metric_{}_instruction_{}.json",
        entry.column + 1,
        entry.id
    ))
}
