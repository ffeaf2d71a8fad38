use crate::services::matcher::analysis::normalizer::normalize;
use crate::services::matcher::analysis::scoring::aggregate_group;
use crate::services::matcher::catalog::primary_attributes;
use crate::services::matcher::models::avatar::PartialAvatarConfiguration;
use crate::services::matcher::models::types::MatchingConfig;
use crate::services::matcher::pipeline::full_pipeline::{
    compare_normalized, round_score, weighted_score,
};

#[cfg(feature = "debug_matcher")]
use log::debug;

/// Pass/fail check that skips the secondary pass when the primary group
/// already decides the outcome. Uses the default config.
///
/// Always agrees with `compare_avatars(..).is_match` for the same threshold.
pub fn quick_match(
    target: Option<&PartialAvatarConfiguration>,
    candidate: Option<&PartialAvatarConfiguration>,
    threshold: u8,
) -> bool {
    quick_match_with_config(target, candidate, threshold, &MatchingConfig::default())
}

pub fn quick_match_with_config(
    target: Option<&PartialAvatarConfiguration>,
    candidate: Option<&PartialAvatarConfiguration>,
    threshold: u8,
    config: &MatchingConfig,
) -> bool {
    let target = normalize(target);
    let candidate = normalize(candidate);

    let primary = aggregate_group(
        &target,
        &candidate,
        &primary_attributes(),
        config.use_fuzzy_matching,
    );

    if let Some(decision) = shortcut_decision(primary.score, threshold, config) {
        #[cfg(feature = "debug_matcher")]
        debug!(
            "[MATCHER_CALIBRATION] quick_match: shortcut | primary={:.2} threshold={} decision={}",
            primary.score, threshold, decision
        );
        return decision;
    }

    #[cfg(feature = "debug_matcher")]
    debug!(
        "[MATCHER_CALIBRATION] quick_match: ambiguous, running full pipeline | primary={:.2} threshold={}",
        primary.score, threshold
    );

    compare_normalized(&target, &candidate, threshold, config).is_match
}

/// Decide from the primary score alone when the secondary score cannot change
/// the outcome.
///
/// Bounds come from the config's weights: a secondary score of 0 still passes,
/// or a secondary score of 100 still fails. Returns `None` when undecided or when
/// the weights are unusable (non-finite or negative).
pub(crate) fn shortcut_decision(
    primary_score: f64,
    threshold: u8,
    config: &MatchingConfig,
) -> Option<bool> {
    let weights = [config.primary_weight, config.secondary_weight];
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return None;
    }

    let worst_case = round_score(weighted_score(primary_score, 0.0, config));
    if worst_case >= threshold {
        return Some(true);
    }

    let best_case = round_score(weighted_score(primary_score, 100.0, config));
    if best_case < threshold {
        return Some(false);
    }

    None
}

#[cfg(test)]
#[path = "../tests/pipeline/quick_pipeline_tests.rs"]
mod quick_pipeline_tests;
