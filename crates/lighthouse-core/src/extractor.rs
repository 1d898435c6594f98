//! Metrics heuristic extractor: scrapes numeric tokens out of the operator's
//! own text to refresh the dashboard. Deliberately loose — a substitute for
//! structured input, kept behind a trait so a stricter parser can replace it
//! without touching the controller.

use crate::shared::TacticalMetrics;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit-run pattern"));

/// Derives metric updates from raw user text. Pure with respect to the input
/// metrics: implementations return a new value and never mutate other state.
pub trait MetricsExtractor: Send + Sync {
    fn extract(&self, user_text: &str, current: &TacticalMetrics) -> TacticalMetrics;
}

/// Substring-trigger heuristic, applied rule by rule:
///
/// 1. Input mentioning "sleep" or "diet" with at least three digit runs maps
///    the first three onto sleep/diet/exercise. A token that parses to zero or
///    fails to parse keeps the prior value — a literal 0 report is
///    indistinguishable from a failed parse and is silently dropped.
/// 2. Input mentioning "intercepted" bumps the interception counter and stamps
///    the local wall-clock time.
///
/// Both rules may fire on one input; they touch disjoint sub-objects.
/// `territory` is never written here.
pub struct HeuristicExtractor;

impl MetricsExtractor for HeuristicExtractor {
    fn extract(&self, user_text: &str, current: &TacticalMetrics) -> TacticalMetrics {
        let lower = user_text.to_lowercase();
        let mut next = current.clone();

        if lower.contains("sleep") || lower.contains("diet") {
            let tokens: Vec<u32> = DIGIT_RUNS
                .find_iter(user_text)
                .map(|m| m.as_str().parse::<u32>().unwrap_or(0))
                .collect();
            if tokens.len() >= 3 {
                if tokens[0] != 0 {
                    next.energy.sleep = tokens[0];
                }
                if tokens[1] != 0 {
                    next.energy.diet = tokens[1];
                }
                if tokens[2] != 0 {
                    next.energy.exercise = tokens[2];
                }
            }
        }

        if lower.contains("intercepted") {
            next.fortress.interceptions += 1;
            next.fortress.last_intercept_time = Local::now().format("%H:%M:%S").to_string();
        }

        next
    }
}
