//! Core domain types for the Wohnwert location-scoring engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early; the
//! default metric catalogue is built once at startup and passed explicitly.
//!
//! # Examples
//! ```
//! use wohnwert_core::{MetricCatalogue, MetricKey};
//!
//! let catalogue = MetricCatalogue::default();
//! assert!(catalogue.config(MetricKey::Noise).is_ok());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod metric;
mod rating;
mod weights;

pub use config::{MetricCatalogue, MetricConfig, MetricConfigError, UnknownMetric};
pub use metric::MetricKey;
pub use rating::Rating;
pub use weights::WeightOverrides;
