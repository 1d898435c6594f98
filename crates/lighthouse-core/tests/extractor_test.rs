//! Heuristic extractor properties: substring triggers, the first-three-tokens
//! rule, the preserved falsy-zero behavior, and interception counting.

use lighthouse_core::{AppState, HeuristicExtractor, MetricsExtractor};

fn extractor() -> HeuristicExtractor {
    HeuristicExtractor
}

#[test]
fn three_tokens_with_trigger_update_all_energy_fields() {
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 90 diet 60 exercise 40, I slacked off", &metrics);
    assert_eq!(next.energy.sleep, 90);
    assert_eq!(next.energy.diet, 60);
    assert_eq!(next.energy.exercise, 40);
    // Territory is write-once at seed time; the extractor never touches it.
    assert_eq!(next.territory, metrics.territory);
}

#[test]
fn two_tokens_with_trigger_change_nothing() {
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 90 diet 60", &metrics);
    assert_eq!(next, metrics);
}

#[test]
fn numbers_without_trigger_word_change_nothing() {
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("worked 10 hours on 3 projects, 2 breaks", &metrics);
    assert_eq!(next, metrics);
}

#[test]
fn diet_alone_is_a_sufficient_trigger() {
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("my DIET was 55 then 65 then 75 today", &metrics);
    assert_eq!(next.energy.sleep, 55);
    assert_eq!(next.energy.diet, 65);
    assert_eq!(next.energy.exercise, 75);
}

#[test]
fn zero_token_keeps_the_prior_value() {
    // A literal 0 parses but is treated as "no update" — indistinguishable
    // from a failed parse. Long-standing behavior, preserved deliberately.
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 0 diet 60 exercise 40", &metrics);
    assert_eq!(next.energy.sleep, metrics.energy.sleep);
    assert_eq!(next.energy.diet, 60);
    assert_eq!(next.energy.exercise, 40);
}

#[test]
fn overlong_digit_run_keeps_the_prior_value() {
    // A run that overflows the metric type counts toward the three-token
    // minimum but updates nothing in its slot.
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 99999999999999999999 diet 60 exercise 40", &metrics);
    assert_eq!(next.energy.sleep, metrics.energy.sleep);
    assert_eq!(next.energy.diet, 60);
    assert_eq!(next.energy.exercise, 40);
}

#[test]
fn intercepted_increments_counter_and_stamps_time() {
    let metrics = AppState::seed().metrics;
    assert_eq!(metrics.fortress.last_intercept_time, "N/A");
    let next = extractor().extract("I INTERCEPTED a doomscroll urge", &metrics);
    assert_eq!(next.fortress.interceptions, metrics.fortress.interceptions + 1);
    assert!(!next.fortress.last_intercept_time.is_empty());
    assert_ne!(next.fortress.last_intercept_time, "N/A");
}

#[test]
fn both_rules_can_fire_on_one_input() {
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("intercepted a distraction; sleep 90 diet 60 exercise 40", &metrics);
    assert_eq!(next.energy.sleep, 90);
    assert_eq!(next.fortress.interceptions, metrics.fortress.interceptions + 1);
}

#[test]
fn values_above_one_hundred_are_written_unclamped() {
    // The extractor does not enforce the 0-100 convention; only the dashboard caps bars.
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 140 diet 60 exercise 40", &metrics);
    assert_eq!(next.energy.sleep, 140);
}

#[test]
fn system_integrity_averages_extreme_unclamped_values_without_overflow() {
    // Unclamped writes mean the sub-fields can sit near u32::MAX; the
    // integrity average must not wrap when summing them.
    let metrics = AppState::seed().metrics;
    let next = extractor().extract("sleep 2000000000 2000000000 2000000000", &metrics);
    assert_eq!(
        (next.energy.sleep, next.energy.diet, next.energy.exercise),
        (2_000_000_000, 2_000_000_000, 2_000_000_000)
    );
    assert_eq!(next.system_integrity(), 2_000_000_000);
}
