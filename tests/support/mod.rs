#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use motion_metric_ft::io::npy::write_matrix;

pub const REFERENCE: [f64; 8] = [0.10, 0.20, 0.90, 0.95, 0.92, 0.15, 0.10, 0.50];

/// Writes a `frames x cols` array where every column repeats `column`.
pub fn write_uniform(path: &Path, column: &[f64], cols: usize) {
    let mut data = Vec::with_capacity(column.len() * cols);
    for v in column {
        data.extend(std::iter::repeat_n(*v, cols));
    }
    let file = File::create(path).unwrap();
    write_matrix(file, column.len(), cols, &data).unwrap();
}
