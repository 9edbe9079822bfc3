//! Scoring operations for residential-location metrics.
//!
//! The crate provides two complementary operations:
//! - [`normalize`] rescales one raw measurement into an integer score in
//!   `0..=100` using the metric's configured range, with a fixed `30..=40`
//!   midrange that always scores a full 100.
//! - [`aggregate`] folds per-metric scores into one overall score as a
//!   weighted mean, tolerating missing metrics.
//!
//! [`LocationReport`] assembles both into a presentable per-location report.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use wohnwert_core::{MetricCatalogue, MetricKey};
//! use wohnwert_scorer::{aggregate, normalize_metric};
//!
//! # fn main() -> Result<(), wohnwert_core::UnknownMetric> {
//! let catalogue = MetricCatalogue::default();
//! let mut scores = BTreeMap::new();
//! scores.insert(
//!     MetricKey::Noise,
//!     normalize_metric(55.0, MetricKey::Noise, &catalogue)?,
//! );
//! let overall = aggregate(&scores, None, &catalogue);
//! assert_eq!(overall, 67);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::collections::BTreeMap;

use wohnwert_core::{MetricCatalogue, MetricConfig, MetricKey, UnknownMetric, WeightOverrides};

mod report;

pub use report::{LocationReport, MetricScore};

/// Inclusive bounds of the midrange every metric treats as optimal.
const OPTIMAL_LOW: f64 = 30.0;
const OPTIMAL_HIGH: f64 = 40.0;

/// Rescale a raw measurement into an integer score in `0..=100`.
///
/// Measurements inside `30..=40` score a full 100; values below slope up
/// from `config.min()` and values above slope down towards `config.max()`.
/// The midrange branch applies to every metric, not only the average-age
/// metric it was introduced for, so `inverted` and plain range scaling are
/// shadowed by it; kept as-is so scores stay comparable with previously
/// published reports.
///
/// Degenerate configurations (`min == 30` or `max == 40`) drive a slope
/// denominator to zero; the final clamp collapses the resulting infinities
/// to a boundary score, and NaN input scores 0.
///
/// # Examples
/// ```
/// use wohnwert_core::MetricConfig;
/// use wohnwert_scorer::normalize;
///
/// # fn main() -> Result<(), wohnwert_core::MetricConfigError> {
/// let noise = MetricConfig::new(0.2, 30.0, 85.0, true)?;
/// assert_eq!(normalize(30.0, &noise), 100);
/// assert_eq!(normalize(85.0, &noise), 0);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "score interpolation is floating-point by nature"
)]
#[must_use]
pub fn normalize(value: f64, config: &MetricConfig) -> u8 {
    let score = if (OPTIMAL_LOW..=OPTIMAL_HIGH).contains(&value) {
        100.0
    } else if value < OPTIMAL_LOW {
        ((value - config.min()) / (OPTIMAL_LOW - config.min())) * 100.0
    } else {
        100.0 - ((value - OPTIMAL_HIGH) / (config.max() - OPTIMAL_HIGH)) * 100.0
    };
    to_score(score)
}

/// Normalise a raw measurement for the metric identified by `key`.
///
/// # Errors
/// Returns [`UnknownMetric`] when the catalogue has no entry for `key`.
pub fn normalize_metric(
    value: f64,
    key: MetricKey,
    catalogue: &MetricCatalogue,
) -> Result<u8, UnknownMetric> {
    catalogue.config(key).map(|config| normalize(value, config))
}

/// Combine per-metric scores into one overall score in `0..=100`.
///
/// The overall score is the weighted mean over the metrics present in
/// `scores`; absent metrics are excluded from both numerator and
/// denominator rather than counted as zero. An override weight wins over
/// the configured default. An empty score set, or weights summing to zero,
/// yields 0 rather than an error.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use wohnwert_core::{MetricCatalogue, MetricKey, WeightOverrides};
/// use wohnwert_scorer::aggregate;
///
/// let catalogue = MetricCatalogue::default();
/// let scores = BTreeMap::from([
///     (MetricKey::Noise, 80),
///     (MetricKey::InternetSpeed, 90),
/// ]);
/// let overrides = WeightOverrides::new()
///     .with_weight(MetricKey::Noise, 0.5)
///     .with_weight(MetricKey::InternetSpeed, 0.5);
/// assert_eq!(aggregate(&scores, Some(&overrides), &catalogue), 85);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the weighted mean requires floating-point accumulation"
)]
#[must_use]
pub fn aggregate(
    scores: &BTreeMap<MetricKey, u8>,
    overrides: Option<&WeightOverrides>,
    catalogue: &MetricCatalogue,
) -> u8 {
    let mut weighted_sum = 0.0_f64;
    let mut total_weight = 0.0_f64;
    for (&key, &score) in scores {
        let Ok(config) = catalogue.config(key) else {
            log::debug!("no configuration for metric '{key}'; skipping");
            continue;
        };
        let weight = overrides
            .and_then(|chosen| chosen.weight(key))
            .unwrap_or_else(|| config.weight());
        weighted_sum += f64::from(score) * weight;
        total_weight += weight;
    }
    if total_weight <= 0.0_f64 {
        return 0;
    }
    to_score(weighted_sum / total_weight)
}

/// Clamp a float intermediate into `0..=100` and round to the nearest
/// integer score. NaN collapses to 0.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped into 0..=100 before the cast"
)]
fn to_score(value: f64) -> u8 {
    let bounded = value.clamp(0.0, 100.0);
    if bounded.is_nan() {
        0
    } else {
        bounded.round() as u8
    }
}
