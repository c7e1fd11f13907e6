use pixplot::core::Histogram;
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_sample_is_counted_or_dropped(
        samples in prop::collection::vec(prop_oneof![
            -200.0f64..200.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
        ], 0..200),
        bins in 1usize..64,
        min in -100.0f64..0.0,
        span in 0.5f64..100.0,
    ) {
        let histogram = Histogram::compute(&samples, bins, min, min + span).expect("histogram");

        prop_assert_eq!(histogram.counts().len(), bins);
        prop_assert_eq!(histogram.total() + histogram.dropped(), samples.len());
        prop_assert!(histogram.scale_max() >= 1);
    }

    #[test]
    fn range_maximum_lands_in_last_bin(bins in 1usize..64, min in -50.0f64..50.0, span in 0.5f64..50.0) {
        let max = min + span;
        let histogram = Histogram::compute(&[max], bins, min, max).expect("histogram");

        prop_assert_eq!(histogram.counts()[bins - 1], 1);
    }
}
