use motion_metric_ft::error::MetricFtError;
use motion_metric_ft::scores::FrameRange;
use motion_metric_ft::scores::extrema::{Thresholds, collapse_runs, find_ranges_by_threshold};

fn r(start: usize, end: usize) -> FrameRange {
    FrameRange::new(start, end)
}

#[test]
fn reference_scenario() {
    let series: Vec<i64> = vec![10, 20, 90, 95, 92, 15, 10, 50];
    let ext = find_ranges_by_threshold(&series, Thresholds::new(0.8, 0.2)).unwrap();

    assert_eq!(ext.abs_max, 95);
    assert_eq!(ext.abs_min, 10);
    assert!((ext.max_threshold - 76.0).abs() < 1e-9);
    assert!((ext.min_threshold - 27.0).abs() < 1e-9);
    assert_eq!(ext.maxima, vec![r(2, 4)]);
    assert_eq!(ext.maxima_values, vec![95]);
    assert_eq!(ext.minima, vec![r(0, 1), r(5, 6)]);
    assert_eq!(ext.minima_values, vec![10, 10]);
}

#[test]
fn default_thresholds_match_cli_defaults() {
    let t = Thresholds::default();
    assert_eq!(t.max_percentage, 0.8);
    assert_eq!(t.min_percentage, 0.2);
    assert!(t.in_unit_interval());
    assert!(!Thresholds::new(2.0, 0.2).in_unit_interval());
}

#[test]
fn empty_series_is_an_error() {
    let series: Vec<i64> = Vec::new();
    let err = find_ranges_by_threshold(&series, Thresholds::default()).unwrap_err();
    assert!(matches!(err, MetricFtError::EmptyInput));
}

#[test]
fn single_frame_lands_in_both_bands() {
    let ext = find_ranges_by_threshold(&[5i64], Thresholds::default()).unwrap();
    assert_eq!(ext.maxima, vec![r(0, 0)]);
    assert_eq!(ext.minima, vec![r(0, 0)]);
    assert_eq!(ext.maxima_values, vec![5]);
    assert_eq!(ext.minima_values, vec![5]);
}

#[test]
fn single_negative_frame_only_reaches_minima() {
    // 0.8 * -5 = -4, which -5 does not reach.
    let ext = find_ranges_by_threshold(&[-5i64], Thresholds::default()).unwrap();
    assert!(ext.maxima.is_empty());
    assert_eq!(ext.minima, vec![r(0, 0)]);
}

#[test]
fn unreachable_max_threshold_yields_empty_maxima() {
    let ext = find_ranges_by_threshold(&[10i64, 20, 30], Thresholds::new(2.0, 0.2)).unwrap();
    assert!(ext.maxima.is_empty());
    assert!(ext.maxima_values.is_empty());
    assert_eq!(ext.minima, vec![r(0, 0)]);
}

#[test]
fn doubling_a_negative_maximum_lowers_the_bar() {
    let ext = find_ranges_by_threshold(&[-10i64, -5, -8], Thresholds::new(2.0, 0.2)).unwrap();
    assert_eq!(ext.max_threshold, -10.0);
    assert_eq!(ext.maxima, vec![r(0, 2)]);
    assert_eq!(ext.maxima_values, vec![-5]);
}

#[test]
fn negative_percentages_are_passed_through() {
    let ext = find_ranges_by_threshold(&[1i64, 2, 3], Thresholds::new(-1.0, -1.0)).unwrap();
    // max threshold -3 admits everything; min threshold 1 - 2 = -1 admits nothing.
    assert_eq!(ext.maxima, vec![r(0, 2)]);
    assert!(ext.minima.is_empty());
    assert!(ext.minima_values.is_empty());
}

#[test]
fn overlapping_bands_are_kept() {
    let ext = find_ranges_by_threshold(&[1i64, 2, 3], Thresholds::new(0.1, 0.9)).unwrap();
    assert_eq!(ext.maxima, vec![r(0, 2)]);
    assert_eq!(ext.minima, vec![r(0, 1)]);
    assert_eq!(ext.minima_values, vec![1]);
}

#[test]
fn flat_series_covers_everything() {
    let ext = find_ranges_by_threshold(&[7i64; 4], Thresholds::default()).unwrap();
    assert_eq!(ext.maxima, vec![r(0, 3)]);
    assert_eq!(ext.minima, vec![r(0, 3)]);
}

#[test]
fn float_series_supported() {
    let series = [0.5f64, 0.95, 0.9, 0.1, 0.12];
    let ext = find_ranges_by_threshold(&series, Thresholds::default()).unwrap();
    assert_eq!(ext.maxima, vec![r(1, 2)]);
    assert_eq!(ext.maxima_values, vec![0.95]);
    assert_eq!(ext.minima, vec![r(3, 4)]);
    assert_eq!(ext.minima_values, vec![0.1]);
}

#[test]
fn range_value_is_the_extreme_inside_the_run() {
    let series: Vec<i64> = vec![100, 90, 98, 0, 95];
    let ext = find_ranges_by_threshold(&series, Thresholds::new(0.9, 0.1)).unwrap();
    assert_eq!(ext.maxima, vec![r(0, 2), r(4, 4)]);
    assert_eq!(ext.maxima_values, vec![100, 95]);
}

#[test]
fn collapse_runs_cases() {
    assert!(collapse_runs(&[]).is_empty());
    assert_eq!(collapse_runs(&[3]), vec![r(3, 3)]);
    assert_eq!(
        collapse_runs(&[0, 1, 2, 5, 7, 8]),
        vec![r(0, 2), r(5, 5), r(7, 8)]
    );
}

#[test]
fn frame_range_helpers() {
    let range = r(2, 4);
    assert_eq!(range.frame_count(), 3);
    assert!(range.contains(2) && range.contains(4));
    assert!(!range.contains(5));
    assert_eq!(range.to_string(), "[2, 4]");
}
