//! Assembles per-metric scores into a presentable location report.

use std::collections::BTreeMap;

use wohnwert_core::{MetricCatalogue, MetricConfig, MetricKey, Rating, WeightOverrides};

use crate::{aggregate, normalize};

/// One metric's contribution to a location report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricScore {
    /// Metric this entry describes.
    pub key: MetricKey,
    /// Raw measurement in the metric's natural unit.
    pub raw_value: f64,
    /// Normalised score in `0..=100`.
    pub score: u8,
    /// Interpretation band for the score.
    pub rating: Rating,
    /// Human-readable summary sentence.
    pub description: String,
}

/// Scored summary of one candidate location.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use wohnwert_core::{MetricCatalogue, MetricKey};
/// use wohnwert_scorer::LocationReport;
///
/// let catalogue = MetricCatalogue::default();
/// let measurements = BTreeMap::from([(MetricKey::Noise, 38.0)]);
/// let report = LocationReport::build(&measurements, None, &catalogue);
/// assert_eq!(report.overall, 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReport {
    /// Per-metric breakdown in key order; metrics without measurements are
    /// omitted.
    pub metrics: Vec<MetricScore>,
    /// Weighted overall score in `0..=100`.
    pub overall: u8,
    /// Interpretation band for the overall score.
    pub rating: Rating,
}

impl LocationReport {
    /// Normalise every measured metric and fold the results into an overall
    /// score.
    ///
    /// Configured metrics without a measurement are skipped and noted at
    /// debug level; they contribute nothing to the overall score.
    #[must_use]
    pub fn build(
        measurements: &BTreeMap<MetricKey, f64>,
        overrides: Option<&WeightOverrides>,
        catalogue: &MetricCatalogue,
    ) -> Self {
        let mut metrics = Vec::new();
        let mut scores = BTreeMap::new();
        for (key, config) in catalogue.iter() {
            let Some(&raw_value) = measurements.get(&key) else {
                log::debug!("no measurement for metric '{key}'; skipping");
                continue;
            };
            let score = normalize(raw_value, config);
            let rating = Rating::for_score(score);
            scores.insert(key, score);
            metrics.push(MetricScore {
                key,
                raw_value,
                score,
                rating,
                description: describe(key, raw_value, score, config, rating),
            });
        }
        let overall = aggregate(&scores, overrides, catalogue);
        Self {
            metrics,
            overall,
            rating: Rating::for_score(overall),
        }
    }
}

/// German summary sentence for one scored metric.
fn describe(
    key: MetricKey,
    raw_value: f64,
    score: u8,
    config: &MetricConfig,
    rating: Rating,
) -> String {
    let value = config
        .unit()
        .map_or_else(|| format!("{raw_value}"), |unit| format!("{raw_value} {unit}"));
    let rounded = raw_value.round();
    let verdict = format!("{} ({score}/100).", rating.label());
    match key {
        MetricKey::Noise => format!("Die Lärmbelastung beträgt {value}. {verdict}"),
        MetricKey::Light => {
            format!("Lichtverschmutzung Stufe {rounded} auf der Bortle-Skala. {verdict}")
        }
        MetricKey::Crime => format!("Kriminalitätsrate von {value}. {verdict}"),
        MetricKey::InternetSpeed => format!("Internetgeschwindigkeit von {value}. {verdict}"),
        MetricKey::Demographics => format!("Durchschnittsalter {value}. {verdict}"),
        MetricKey::GroceryStores => {
            format!("{rounded} Lebensmittelgeschäfte in der Nähe. {verdict}")
        }
        MetricKey::Laundromats => format!("{rounded} Waschsalons in der Nähe. {verdict}"),
        MetricKey::Parking => format!("{rounded} Parkmöglichkeiten verfügbar. {verdict}"),
    }
}
