use crate::error::Result;
use crate::instructions::column_name;
use crate::io::npy::MetricMatrix;
use crate::math::stats;
use crate::scores::{ColumnStats, FileColumnStats};

pub fn describe_matrix(file_name: &str, matrix: &MetricMatrix) -> Result<FileColumnStats> {
    let mut columns = Vec::with_capacity(matrix.cols);
    for col in 0..matrix.cols {
        let mut values = matrix.column(col)?;
        let max = stats::max(&values);
        let min = stats::min(&values);
        let mean = stats::mean(&values);
        let median = stats::median(&mut values);
        columns.push(ColumnStats {
            column: col,
            name: column_name(col).to_string(),
            max,
            min,
            median,
            mean,
        });
    }
    Ok(FileColumnStats {
        file_name: file_name.to_string(),
        columns,
    })
}
