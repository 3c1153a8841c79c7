use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::io::write_with;
use crate::scores::peaks::{ColumnPeaks, FilePeaks, PeakBand};

pub fn format_report(files: &[FilePeaks], percent: f64) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(&format!("Processing {}:\n", file.file_name));
        for column in &file.columns {
            push_column(&mut out, column, percent);
        }
        out.push('\n');
    }
    out
}

pub fn write_report(path: &Path, files: &[FilePeaks], percent: f64) -> Result<()> {
    let report = format_report(files, percent);
    write_with(path, |w| w.write_all(report.as_bytes()))
}

fn push_column(out: &mut String, column: &ColumnPeaks, percent: f64) {
    out.push_str(&format!("Column {}:\n", column.column));
    push_band(out, "Min", &column.min, percent);
    push_band(out, "Max", &column.max, percent);
    for (label, band) in [("Max", &column.max), ("Min", &column.min)] {
        for peak in &band.peaks {
            out.push_str(&format!(
                "This is {} {} peak: {} ~ {}\n",
                column.name, label, peak.start, peak.end
            ));
        }
    }
}

fn push_band(out: &mut String, label: &str, band: &PeakBand, percent: f64) {
    let indices: Vec<String> = band.indices.iter().map(|i| i.to_string()).collect();
    let values: Vec<String> = band.values.iter().map(|v| format!("{:?}", v)).collect();
    out.push_str(&format!(
        "  {} {}% indices: [{}], values: [{}]\n",
        label,
        percent,
        indices.join(", "),
        values.join(", ")
    ));
}
