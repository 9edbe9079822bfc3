//! Caller-supplied weight overrides applied during aggregation.
//!
//! Overrides take precedence over the configured default weight for metrics
//! they name; other metrics keep their defaults.

use std::collections::BTreeMap;

use crate::MetricKey;

/// Per-metric weight overrides for the overall score.
///
/// Weights are sanitised on insert: negative or non-finite values are stored
/// as zero, which removes the metric's contribution without excluding it.
///
/// # Examples
/// ```
/// use wohnwert_core::{MetricKey, WeightOverrides};
///
/// let overrides = WeightOverrides::new()
///     .with_weight(MetricKey::Noise, 0.5)
///     .with_weight(MetricKey::InternetSpeed, 0.5);
/// assert_eq!(overrides.weight(MetricKey::Noise), Some(0.5));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightOverrides {
    weights: BTreeMap<MetricKey, f64>,
}

impl WeightOverrides {
    /// Construct an empty override set.
    ///
    /// # Examples
    /// ```
    /// use wohnwert_core::{MetricKey, WeightOverrides};
    ///
    /// let overrides = WeightOverrides::new();
    /// assert!(overrides.weight(MetricKey::Crime).is_none());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Return the override for a metric, if present.
    #[must_use]
    pub fn weight(&self, key: MetricKey) -> Option<f64> {
        self.weights.get(&key).copied()
    }

    /// Insert or update an override.
    ///
    /// Negative and non-finite values are stored as zero.
    pub fn set_weight(&mut self, key: MetricKey, weight: f64) {
        let sanitised = if weight.is_finite() {
            weight.max(0.0)
        } else {
            0.0
        };
        self.weights.insert(key, sanitised);
    }

    /// Add an override while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, key: MetricKey, weight: f64) -> Self {
        self.set_weight(key, weight);
        self
    }

    /// Report whether any overrides are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
