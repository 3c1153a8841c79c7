use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::{MetricFtError, Result};

pub const SERIES_SUFFIX: &str = ".npy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFile {
    pub path: PathBuf,
    pub name: String,
    /// First run of digits in the name, 0 when there is none.
    pub number: u64,
    /// Position in the name-sorted directory listing.
    pub listing_index: usize,
}

impl SeriesFile {
    pub fn new(path: PathBuf, listing_index: usize) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            number: extract_number(&name),
            path,
            name,
            listing_index,
        }
    }
}

/// Parses the first run of ASCII digits, saturating at `u64::MAX`.
pub fn extract_number(name: &str) -> u64 {
    name.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .fold(None, |acc: Option<u64>, c| {
            let digit = u64::from(c as u8 - b'0');
            Some(
                acc.unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .unwrap_or(u64::MAX),
            )
        })
        .unwrap_or(0)
}

pub fn compare_series_files(a: &SeriesFile, b: &SeriesFile) -> Ordering {
    (a.number, a.listing_index).cmp(&(b.number, b.listing_index))
}

pub fn sort_series_files(files: &mut [SeriesFile]) {
    files.sort_by(compare_series_files);
}

/// Lists `.npy` files in `dir`, ordered by embedded number and then by name.
pub fn discover_series_files(dir: &Path) -> Result<Vec<SeriesFile>> {
    if !dir.is_dir() {
        return Err(MetricFtError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|_| MetricFtError::InputNotFound {
        path: dir.to_path_buf(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|_| MetricFtError::InputNotFound {
            path: dir.to_path_buf(),
        })?;
        let path = entry.path();
        let is_series = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.ends_with(SERIES_SUFFIX));
        if is_series && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut files: Vec<SeriesFile> = paths
        .into_iter()
        .enumerate()
        .map(|(i, p)| SeriesFile::new(p, i))
        .collect();
    sort_series_files(&mut files);
    Ok(files)
}
