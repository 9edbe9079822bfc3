//! Facade crate for the Wohnwert location-scoring engine.
//!
//! This crate re-exports the core domain types and the scoring operations so
//! callers depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use wohnwert_engine::{MetricCatalogue, MetricKey, aggregate, normalize_metric};
//!
//! # fn main() -> Result<(), wohnwert_engine::UnknownMetric> {
//! let catalogue = MetricCatalogue::default();
//! let mut scores = BTreeMap::new();
//! scores.insert(
//!     MetricKey::Noise,
//!     normalize_metric(38.0, MetricKey::Noise, &catalogue)?,
//! );
//! let overall = aggregate(&scores, None, &catalogue);
//! assert_eq!(overall, 100);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use wohnwert_core::{
    MetricCatalogue, MetricConfig, MetricConfigError, MetricKey, Rating, UnknownMetric,
    WeightOverrides,
};

pub use wohnwert_scorer::{LocationReport, MetricScore, aggregate, normalize, normalize_metric};
