use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MetricFtError, Result};

pub mod describe;
pub mod json_writer;
pub mod npy;
pub mod peaks;
pub mod summary;

/// Creates `path` and hands a buffered writer to `f`, mapping every failure
/// to a serialization error for that path.
pub(crate) fn write_with<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let wrap = |source: std::io::Error| MetricFtError::Serialization {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    f(&mut writer).map_err(wrap)?;
    writer.flush().map_err(wrap)?;
    Ok(())
}
