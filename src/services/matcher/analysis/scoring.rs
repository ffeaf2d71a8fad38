//! Scoring primitives: per-attribute comparison and per-group aggregation.

use crate::services::matcher::catalog::{are_related, same_token, AvatarAttribute};
use crate::services::matcher::models::avatar::AvatarConfiguration;

pub const EXACT_MATCH_SCORE: f64 = 1.0;
pub const PARTIAL_MATCH_SCORE: f64 = 0.7;
pub const NO_MATCH_SCORE: f64 = 0.0;

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

/// Score one attribute pair as exact (1.0), related (0.7) or unrelated (0.0).
///
/// Exact equality is case-insensitive (Unicode lowercasing). Related means both values share a
/// similarity group of this attribute; only consulted when `use_fuzzy` is set.
pub fn compare_attribute(
    attribute: AvatarAttribute,
    target_value: &str,
    candidate_value: &str,
    use_fuzzy: bool,
) -> f64 {
    if same_token(target_value, candidate_value) {
        return EXACT_MATCH_SCORE;
    }

    if use_fuzzy && are_related(attribute, target_value, candidate_value) {
        return PARTIAL_MATCH_SCORE;
    }

    NO_MATCH_SCORE
}

/// Aggregated outcome for one attribute set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupScore {
    /// Percentage 0..=100, unrounded.
    pub score: f64,
    pub matching: Vec<AvatarAttribute>,
    pub partial: Vec<AvatarAttribute>,
    pub non_matching: Vec<AvatarAttribute>,
}

impl GroupScore {
    fn record(&mut self, attribute: AvatarAttribute, attribute_score: f64) {
        if attribute_score >= EXACT_MATCH_SCORE {
            self.matching.push(attribute);
        } else if attribute_score > NO_MATCH_SCORE {
            self.partial.push(attribute);
        } else {
            self.non_matching.push(attribute);
        }
    }
}

/// Compare every attribute of `attributes` and reduce to a 0..=100 percentage.
///
/// Each attribute lands in exactly one bucket, in iteration order. An empty
/// attribute set yields score 0 and empty buckets.
pub fn aggregate_group(
    target: &AvatarConfiguration,
    candidate: &AvatarConfiguration,
    attributes: &[AvatarAttribute],
    use_fuzzy: bool,
) -> GroupScore {
    let mut group = GroupScore::default();
    if attributes.is_empty() {
        return group;
    }

    let mut total = 0.0;
    for attribute in attributes {
        let attribute_score = compare_attribute(
            *attribute,
            target.get(*attribute),
            candidate.get(*attribute),
            use_fuzzy,
        );
        total += attribute_score;
        group.record(*attribute, attribute_score);
    }

    group.score = ((total / attributes.len() as f64) * 100.0).clamp(SCORE_MIN, SCORE_MAX);
    group
}

#[cfg(test)]
#[path = "../tests/analysis/scoring_tests.rs"]
mod tests;
