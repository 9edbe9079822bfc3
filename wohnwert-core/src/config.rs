//! Metric configuration and the catalogue consulted while scoring.
//!
//! The catalogue is an immutable mapping from [`MetricKey`] to
//! [`MetricConfig`]. The defaults mirror the published scoring table; callers
//! may build their own catalogue when a deployment measures different ranges.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::MetricKey;

/// Validated configuration for a single metric.
///
/// `min` and `max` describe the valid domain of raw measurements, `weight`
/// the metric's relative contribution to the overall score, and `inverted`
/// the documented polarity (lower raw values more favourable). `label`,
/// `icon`, and `unit` are presentation metadata and play no part in scoring.
///
/// # Examples
/// ```
/// use wohnwert_core::MetricConfig;
///
/// # fn main() -> Result<(), wohnwert_core::MetricConfigError> {
/// let noise = MetricConfig::new(0.2, 30.0, 85.0, true)?
///     .with_label("Lärmbelastung")
///     .with_unit("dB");
/// assert_eq!(noise.unit(), Some("dB"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMetricConfig")
)]
pub struct MetricConfig {
    weight: f64,
    min: f64,
    max: f64,
    inverted: bool,
    label: String,
    icon: String,
    unit: Option<String>,
}

impl MetricConfig {
    /// Validate and construct a configuration without presentation metadata.
    ///
    /// # Errors
    /// Returns [`MetricConfigError::InvalidRange`] unless `min < max` with
    /// both bounds finite, and [`MetricConfigError::InvalidWeight`] unless
    /// the weight is finite and non-negative.
    pub const fn new(
        weight: f64,
        min: f64,
        max: f64,
        inverted: bool,
    ) -> Result<Self, MetricConfigError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(MetricConfigError::InvalidRange { min, max });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(MetricConfigError::InvalidWeight { weight });
        }
        Ok(Self {
            weight,
            min,
            max,
            inverted,
            label: String::new(),
            icon: String::new(),
            unit: None,
        })
    }

    /// Attach a human-readable label while consuming `self`.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Attach a presentation icon while consuming `self`.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Attach the measurement unit while consuming `self`.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Relative contribution to the overall score.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Lower bound of the valid measurement domain.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the valid measurement domain.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Whether lower raw values are documented as more favourable.
    #[must_use]
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Human-readable label for reports.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Presentation icon for reports.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Measurement unit, when the metric has one.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}

/// Serde mirror of [`MetricConfig`]; deserialized input re-runs the
/// constructor validation before a config is handed out.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMetricConfig {
    weight: f64,
    min: f64,
    max: f64,
    inverted: bool,
    #[serde(default)]
    label: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    unit: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMetricConfig> for MetricConfig {
    type Error = MetricConfigError;

    fn try_from(raw: RawMetricConfig) -> Result<Self, Self::Error> {
        let mut config = Self::new(raw.weight, raw.min, raw.max, raw.inverted)?
            .with_label(raw.label)
            .with_icon(raw.icon);
        config.unit = raw.unit;
        Ok(config)
    }
}

/// Errors raised while validating a metric configuration.
#[derive(Debug, Error, PartialEq)]
pub enum MetricConfigError {
    /// The valid range was reversed, empty, or non-finite.
    #[error("metric range [{min}, {max}] must be finite with min < max")]
    InvalidRange {
        /// Lower bound supplied by the caller.
        min: f64,
        /// Upper bound supplied by the caller.
        max: f64,
    },
    /// The weight was negative or non-finite.
    #[error("metric weight {weight} must be finite and non-negative")]
    InvalidWeight {
        /// Weight supplied by the caller.
        weight: f64,
    },
}

/// Error returned when a catalogue lookup misses.
///
/// A miss indicates a wiring bug upstream rather than bad input data, so the
/// failure is surfaced instead of falling back to a default.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("metric '{key}' is not configured")]
pub struct UnknownMetric {
    /// Key that had no catalogue entry.
    pub key: MetricKey,
}

/// Immutable table of metric configurations keyed by [`MetricKey`].
///
/// Construct the table once at process start and pass it explicitly; nothing
/// mutates it while scoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricCatalogue {
    configs: BTreeMap<MetricKey, MetricConfig>,
}

impl MetricCatalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            configs: BTreeMap::new(),
        }
    }

    /// Insert or replace the configuration for a key.
    pub fn insert(&mut self, key: MetricKey, config: MetricConfig) {
        self.configs.insert(key, config);
    }

    /// Insert a configuration while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_config(mut self, key: MetricKey, config: MetricConfig) -> Self {
        self.insert(key, config);
        self
    }

    /// Look up the configuration for a key.
    ///
    /// # Errors
    /// Returns [`UnknownMetric`] when the key has no entry.
    pub fn config(&self, key: MetricKey) -> Result<&MetricConfig, UnknownMetric> {
        self.configs.get(&key).ok_or(UnknownMetric { key })
    }

    /// Iterate over configured metrics in key order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &MetricConfig)> {
        self.configs.iter().map(|(&key, config)| (key, config))
    }

    /// Number of configured metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Report whether any metrics are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl Default for MetricCatalogue {
    fn default() -> Self {
        let entry = |weight, min, max, inverted, label: &str, icon: &str, unit: Option<&str>| {
            MetricConfig {
                weight,
                min,
                max,
                inverted,
                label: label.to_owned(),
                icon: icon.to_owned(),
                unit: unit.map(str::to_owned),
            }
        };
        let configs = BTreeMap::from([
            (
                MetricKey::Noise,
                entry(0.2, 30.0, 85.0, true, "Lärmbelastung", "🔊", Some("dB")),
            ),
            (
                MetricKey::Light,
                entry(0.1, 1.0, 9.0, true, "Lichtverschmutzung", "💡", None),
            ),
            (
                MetricKey::Crime,
                entry(0.2, 0.0, 50.0, true, "Kriminalität", "🛡️", Some("pro 1000")),
            ),
            (
                MetricKey::InternetSpeed,
                entry(
                    0.2,
                    10.0,
                    1000.0,
                    false,
                    "Internetgeschwindigkeit",
                    "🌐",
                    Some("Mbps"),
                ),
            ),
            (
                MetricKey::Demographics,
                entry(
                    0.05,
                    20.0,
                    50.0,
                    false,
                    "Demografie",
                    "👥",
                    Some("Durchschnittsalter"),
                ),
            ),
            (
                MetricKey::GroceryStores,
                entry(
                    0.15,
                    0.0,
                    15.0,
                    false,
                    "Lebensmittelgeschäfte",
                    "🛒",
                    Some("Anzahl"),
                ),
            ),
            (
                MetricKey::Laundromats,
                entry(0.05, 0.0, 5.0, false, "Waschsalons", "🧺", Some("Anzahl")),
            ),
            (
                MetricKey::Parking,
                entry(
                    0.15,
                    0.0,
                    10.0,
                    false,
                    "Parkmöglichkeiten",
                    "🅿️",
                    Some("Anzahl"),
                ),
            ),
        ]);
        Self { configs }
    }
}
