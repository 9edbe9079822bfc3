//! Property coverage for normalisation and aggregation.

use std::collections::BTreeMap;

use proptest::prelude::*;
use wohnwert_core::{MetricCatalogue, MetricConfig, MetricKey};
use wohnwert_scorer::{aggregate, normalize};

fn wide_config() -> MetricConfig {
    MetricConfig::new(0.2, 0.0, 100.0, false)
        .unwrap_or_else(|err| panic!("valid property config: {err}"))
}

proptest! {
    #[test]
    fn scores_never_leave_the_band(value in -1.0e6..1.0e6_f64) {
        let config = wide_config();
        prop_assert!(normalize(value, &config) <= 100);
    }

    #[test]
    fn below_the_midrange_more_is_never_worse(a in 0.0..30.0_f64, b in 0.0..30.0_f64) {
        let config = wide_config();
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalize(lower, &config) <= normalize(higher, &config));
    }

    #[test]
    fn above_the_midrange_more_is_never_better(a in 40.0..100.0_f64, b in 40.0..100.0_f64) {
        let config = wide_config();
        let (lower, higher) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(normalize(lower, &config) >= normalize(higher, &config));
    }

    #[test]
    fn degenerate_ranges_still_produce_scores(value in -1000.0..1000.0_f64) {
        let config = MetricConfig::new(0.1, 30.0, 40.0, false)
            .unwrap_or_else(|err| panic!("valid degenerate config: {err}"));
        let score = normalize(value, &config);
        prop_assert!(score == 0 || score == 100);
    }

    #[test]
    fn raising_one_score_never_lowers_the_overall(
        first in 0_u8..=100,
        second in 0_u8..=100,
        other in 0_u8..=100,
    ) {
        let catalogue = MetricCatalogue::default();
        let mut lower_scores = BTreeMap::new();
        lower_scores.insert(MetricKey::Noise, first.min(second));
        lower_scores.insert(MetricKey::Crime, other);
        let mut higher_scores = lower_scores.clone();
        higher_scores.insert(MetricKey::Noise, first.max(second));
        prop_assert!(
            aggregate(&lower_scores, None, &catalogue)
                <= aggregate(&higher_scores, None, &catalogue)
        );
    }
}
