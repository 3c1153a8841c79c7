use crate::error::Result;
use crate::schema::v1::TrainingRecord;
use crate::scores::FrameRange;
use crate::scores::extrema::{Thresholds, find_ranges_by_threshold};

pub const SCALE: f64 = 100.0;
pub const FRAME_LENGTH_PREFIX: &str = " Frame length is: ";

/// Scales by 100 and rounds half to even, so `0.125` becomes `12`.
pub fn scale_series(series: &[f64]) -> Vec<i64> {
    series
        .iter()
        .map(|v| (v * SCALE).round_ties_even() as i64)
        .collect()
}

/// Renders ranges as `[[s, e], [s, e]]`; an empty list renders as `[]`.
pub fn format_ranges(ranges: &[FrameRange]) -> String {
    let parts: Vec<String> = ranges.iter().map(|r| r.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

pub fn build_record(
    series: &[f64],
    template: &str,
    thresholds: Thresholds,
) -> Result<TrainingRecord> {
    let scaled = scale_series(series);
    let extrema = find_ranges_by_threshold(&scaled, thresholds)?;

    let instruction = format!("{}{}{}", template, FRAME_LENGTH_PREFIX, scaled.len());
    let output = format!(
        "Local maxima: {}.Local minima: {}.",
        format_ranges(&extrema.maxima),
        format_ranges(&extrema.minima)
    );

    Ok(TrainingRecord {
        instruction,
        integer: scaled,
        output,
    })
}
