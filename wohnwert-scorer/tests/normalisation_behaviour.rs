//! Behavioural coverage for normalising single measurements.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wohnwert_core::{MetricCatalogue, MetricKey, UnknownMetric};
use wohnwert_scorer::normalize_metric;

/// Catalogue under test, installed by a given step.
#[fixture]
pub fn catalogue() -> RefCell<Option<MetricCatalogue>> {
    RefCell::new(None)
}

/// Captures the normalisation outcome for assertions.
#[fixture]
pub fn outcome() -> RefCell<Option<Result<u8, UnknownMetric>>> {
    RefCell::new(None)
}

#[given("the default metric catalogue")]
fn default_catalogue(catalogue: &RefCell<Option<MetricCatalogue>>) {
    *catalogue.borrow_mut() = Some(MetricCatalogue::default());
}

#[given("an empty metric catalogue")]
fn empty_catalogue(catalogue: &RefCell<Option<MetricCatalogue>>) {
    *catalogue.borrow_mut() = Some(MetricCatalogue::new());
}

#[when("I normalise a noise reading of 30 dB")]
fn normalise_quiet(
    catalogue: &RefCell<Option<MetricCatalogue>>,
    outcome: &RefCell<Option<Result<u8, UnknownMetric>>>,
) {
    normalise(catalogue, outcome, 30.0);
}

#[when("I normalise a noise reading of 85 dB")]
fn normalise_loud(
    catalogue: &RefCell<Option<MetricCatalogue>>,
    outcome: &RefCell<Option<Result<u8, UnknownMetric>>>,
) {
    normalise(catalogue, outcome, 85.0);
}

fn normalise(
    catalogue: &RefCell<Option<MetricCatalogue>>,
    outcome: &RefCell<Option<Result<u8, UnknownMetric>>>,
    value: f64,
) {
    let binding = catalogue.borrow();
    let table = binding
        .as_ref()
        .unwrap_or_else(|| panic!("catalogue must be initialised"));
    *outcome.borrow_mut() = Some(normalize_metric(value, MetricKey::Noise, table));
}

#[then("the normalised score is 100")]
fn score_is_full(outcome: &RefCell<Option<Result<u8, UnknownMetric>>>) {
    assert_score(outcome, 100);
}

#[then("the normalised score is 0")]
fn score_is_zero(outcome: &RefCell<Option<Result<u8, UnknownMetric>>>) {
    assert_score(outcome, 0);
}

#[then("the lookup fails for the noise metric")]
fn lookup_fails(outcome: &RefCell<Option<Result<u8, UnknownMetric>>>) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("outcome must be recorded"));
    match result {
        Ok(score) => panic!("expected the lookup to fail, got score {score}"),
        Err(err) => assert_eq!(err.key, MetricKey::Noise),
    }
}

fn assert_score(outcome: &RefCell<Option<Result<u8, UnknownMetric>>>, expected: u8) {
    let binding = outcome.borrow();
    let result = binding
        .as_ref()
        .unwrap_or_else(|| panic!("outcome must be recorded"));
    match result {
        Ok(score) => assert_eq!(*score, expected),
        Err(err) => panic!("normalisation should succeed, got {err}"),
    }
}

#[scenario(path = "tests/features/normalisation.feature", index = 0)]
fn quiet_street_scores_full_marks(
    catalogue: RefCell<Option<MetricCatalogue>>,
    outcome: RefCell<Option<Result<u8, UnknownMetric>>>,
) {
    let _ = (catalogue, outcome);
}

#[scenario(path = "tests/features/normalisation.feature", index = 1)]
fn loudest_street_scores_zero(
    catalogue: RefCell<Option<MetricCatalogue>>,
    outcome: RefCell<Option<Result<u8, UnknownMetric>>>,
) {
    let _ = (catalogue, outcome);
}

#[scenario(path = "tests/features/normalisation.feature", index = 2)]
fn empty_catalogue_rejects_lookup(
    catalogue: RefCell<Option<MetricCatalogue>>,
    outcome: RefCell<Option<Result<u8, UnknownMetric>>>,
) {
    let _ = (catalogue, outcome);
}
