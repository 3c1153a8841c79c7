use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::io::write_with;
use crate::scores::FileColumnStats;

pub fn format_report(files: &[FileColumnStats]) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(&format!("Processing {}:\n", file.file_name));
        for c in &file.columns {
            out.push_str(&format!(
                "Column {} ({}): max={:?}, min={:?}, median={:?}, mean={:?}\n",
                c.column, c.name, c.max, c.min, c.median, c.mean
            ));
        }
        out.push('\n');
    }
    out
}

pub fn write_report(path: &Path, files: &[FileColumnStats]) -> Result<()> {
    let report = format_report(files);
    write_with(path, |w| w.write_all(report.as_bytes()))
}
