//! Domain types for the matcher pipeline.
//!
//! Contains: MatchQuality, QualityTiers, MatchingConfig, MatchBreakdown, MatchResult.

use serde::{Deserialize, Serialize};

use crate::services::matcher::catalog::AvatarAttribute;
use crate::types::errors::{MatcherError, MatcherResult};

/// Score cutoff for `is_match` when the caller does not pick one.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 60;

pub const DEFAULT_PRIMARY_WEIGHT: f64 = 0.6;
pub const DEFAULT_SECONDARY_WEIGHT: f64 = 0.4;

/// Tolerance for the `primary_weight + secondary_weight == 1.0` check.
const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

// ==================== QUALITY ====================

/// Quality tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl MatchQuality {
    /// Classify with the default tiers (85 / 70 / 50).
    pub fn from_score(score: u8) -> Self {
        QualityTiers::default().classify(score)
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchQuality::Excellent => write!(f, "excellent"),
            MatchQuality::Good => write!(f, "good"),
            MatchQuality::Fair => write!(f, "fair"),
            MatchQuality::Poor => write!(f, "poor"),
        }
    }
}

/// Lower bounds (inclusive) of each quality tier.
///
/// Independent from the match threshold: a `fair` result can still pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityTiers {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
}

impl Default for QualityTiers {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            fair: 50,
        }
    }
}

impl QualityTiers {
    pub fn classify(&self, score: u8) -> MatchQuality {
        if score >= self.excellent {
            MatchQuality::Excellent
        } else if score >= self.good {
            MatchQuality::Good
        } else if score >= self.fair {
            MatchQuality::Fair
        } else {
            MatchQuality::Poor
        }
    }
}

// ==================== CONFIG ====================

/// Weighting and threshold policy for a comparison.
///
/// Weights are expected to sum to 1.0; the matcher does not enforce it, see
/// [`MatchingConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchingConfig {
    pub primary_weight: f64,
    pub secondary_weight: f64,
    /// Cutoff used by batch operations.
    pub threshold: u8,
    pub use_fuzzy_matching: bool,
    pub quality_tiers: QualityTiers,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            primary_weight: DEFAULT_PRIMARY_WEIGHT,
            secondary_weight: DEFAULT_SECONDARY_WEIGHT,
            threshold: DEFAULT_MATCH_THRESHOLD,
            use_fuzzy_matching: true,
            quality_tiers: QualityTiers::default(),
        }
    }
}

impl MatchingConfig {
    /// Reject weights and tiers that would break the 0..=100 contract.
    pub fn validate(&self) -> MatcherResult<()> {
        let weights = [self.primary_weight, self.secondary_weight];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MatcherError::InvalidConfig(format!(
                "weights must be finite and non-negative (primary={}, secondary={})",
                self.primary_weight, self.secondary_weight
            )));
        }

        let sum = self.primary_weight + self.secondary_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatcherError::InvalidConfig(format!(
                "weights must sum to 1.0, got {sum:.3}"
            )));
        }

        let tiers = &self.quality_tiers;
        if !(tiers.excellent >= tiers.good && tiers.good >= tiers.fair) {
            return Err(MatcherError::InvalidConfig(format!(
                "quality tiers must be ordered excellent >= good >= fair (got {}/{}/{})",
                tiers.excellent, tiers.good, tiers.fair
            )));
        }

        Ok(())
    }
}

// ==================== RESULT ====================

/// Per-group sub-scores and attribute buckets behind a final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub primary_score: u8,
    pub secondary_score: u8,
    /// Exact matches, primary group first.
    pub matching_attributes: Vec<AvatarAttribute>,
    /// Related-but-different values, primary group first.
    pub partial_match_attributes: Vec<AvatarAttribute>,
    pub non_matching_attributes: Vec<AvatarAttribute>,
}

/// Immutable outcome of comparing two descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Weighted final score, 0..=100.
    pub score: u8,
    pub quality: MatchQuality,
    pub is_match: bool,
    pub breakdown: MatchBreakdown,
}

#[cfg(test)]
#[path = "../tests/models/types_tests.rs"]
mod tests;
