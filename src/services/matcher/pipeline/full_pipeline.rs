use crate::services::matcher::analysis::normalizer::normalize;
use crate::services::matcher::analysis::scoring::aggregate_group;
use crate::services::matcher::catalog::{primary_attributes, secondary_attributes};
use crate::services::matcher::models::avatar::{AvatarConfiguration, PartialAvatarConfiguration};
use crate::services::matcher::models::types::{
    MatchBreakdown, MatchResult, MatchingConfig, DEFAULT_MATCH_THRESHOLD,
};

#[cfg(feature = "debug_matcher")]
use log::debug;

/// Compare a producer's target descriptor against a consumer's own descriptor.
///
/// Both sides are normalized first, so absent or partial descriptors are fine.
/// Total: every input yields a result.
pub fn compare_avatars(
    target: Option<&PartialAvatarConfiguration>,
    candidate: Option<&PartialAvatarConfiguration>,
    threshold: u8,
    config: &MatchingConfig,
) -> MatchResult {
    let target = normalize(target);
    let candidate = normalize(candidate);
    compare_normalized(&target, &candidate, threshold, config)
}

/// `compare_avatars` with threshold 60 and the default config.
pub fn compare_with_defaults(
    target: Option<&PartialAvatarConfiguration>,
    candidate: Option<&PartialAvatarConfiguration>,
) -> MatchResult {
    compare_avatars(
        target,
        candidate,
        DEFAULT_MATCH_THRESHOLD,
        &MatchingConfig::default(),
    )
}

/// Full scoring over already-normalized descriptors.
pub fn compare_normalized(
    target: &AvatarConfiguration,
    candidate: &AvatarConfiguration,
    threshold: u8,
    config: &MatchingConfig,
) -> MatchResult {
    let primary = aggregate_group(
        target,
        candidate,
        &primary_attributes(),
        config.use_fuzzy_matching,
    );
    let secondary = aggregate_group(
        target,
        candidate,
        &secondary_attributes(),
        config.use_fuzzy_matching,
    );

    let score = round_score(weighted_score(primary.score, secondary.score, config));

    #[cfg(feature = "debug_matcher")]
    debug!(
        "[MATCHER_CALIBRATION] compare: primary={:.2} secondary={:.2} final={} threshold={}",
        primary.score, secondary.score, score, threshold
    );

    let mut matching_attributes = primary.matching;
    matching_attributes.extend(secondary.matching);
    let mut partial_match_attributes = primary.partial;
    partial_match_attributes.extend(secondary.partial);
    let mut non_matching_attributes = primary.non_matching;
    non_matching_attributes.extend(secondary.non_matching);

    MatchResult {
        score,
        quality: config.quality_tiers.classify(score),
        is_match: score >= threshold,
        breakdown: MatchBreakdown {
            primary_score: round_score(primary.score),
            secondary_score: round_score(secondary.score),
            matching_attributes,
            partial_match_attributes,
            non_matching_attributes,
        },
    }
}

/// Unrounded weighted combination of the two group percentages.
pub(crate) fn weighted_score(primary: f64, secondary: f64, config: &MatchingConfig) -> f64 {
    primary * config.primary_weight + secondary * config.secondary_weight
}

/// Round half away from zero and clamp into 0..=100. Non-finite input maps to 0.
pub(crate) fn round_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
#[path = "../tests/pipeline/full_pipeline_tests.rs"]
mod full_pipeline_tests;
