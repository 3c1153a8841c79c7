use motion_metric_ft::scores::FrameRange;
use motion_metric_ft::scores::extrema::{Thresholds, find_ranges_by_threshold};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn assert_well_formed(ranges: &[FrameRange], len: usize) {
    for range in ranges {
        assert!(range.start <= range.end);
        assert!(range.end < len);
    }
    for pair in ranges.windows(2) {
        // Sorted, disjoint and separated by at least one frame.
        assert!(pair[0].end + 1 < pair[1].start);
    }
}

fn covered(ranges: &[FrameRange], index: usize) -> bool {
    ranges.iter().any(|r| r.contains(index))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn ranges_match_predicates(
        series in prop::collection::vec(-1000i64..1000, 1..200),
        max_pct in 0.0f64..=1.0,
        min_pct in 0.0f64..=1.0,
    ) {
        let ext = find_ranges_by_threshold(&series, Thresholds::new(max_pct, min_pct)).unwrap();

        assert_well_formed(&ext.maxima, series.len());
        assert_well_formed(&ext.minima, series.len());
        prop_assert_eq!(ext.maxima.len(), ext.maxima_values.len());
        prop_assert_eq!(ext.minima.len(), ext.minima_values.len());

        for (i, &v) in series.iter().enumerate() {
            prop_assert_eq!(covered(&ext.maxima, i), v as f64 >= ext.max_threshold);
            prop_assert_eq!(covered(&ext.minima, i), v as f64 <= ext.min_threshold);
        }

        for (range, value) in ext.maxima.iter().zip(&ext.maxima_values) {
            let slice = &series[range.start..=range.end];
            prop_assert_eq!(Some(value), slice.iter().max());
        }
        for (range, value) in ext.minima.iter().zip(&ext.minima_values) {
            let slice = &series[range.start..=range.end];
            prop_assert_eq!(Some(value), slice.iter().min());
        }
    }

    #[test]
    fn detection_is_repeatable(
        series in prop::collection::vec(-500i64..500, 1..100),
        max_pct in -0.5f64..1.5,
        min_pct in -0.5f64..1.5,
    ) {
        let t = Thresholds::new(max_pct, min_pct);
        let a = find_ranges_by_threshold(&series, t).unwrap();
        let b = find_ranges_by_threshold(&series, t).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn minima_always_include_the_minimum(
        series in prop::collection::vec(-1000i64..1000, 1..200),
        min_pct in 0.0f64..=1.0,
    ) {
        let ext = find_ranges_by_threshold(&series, Thresholds::new(0.8, min_pct)).unwrap();
        let argmin = series.iter().position(|v| *v == ext.abs_min).unwrap();
        prop_assert!(covered(&ext.minima, argmin));
    }
}
