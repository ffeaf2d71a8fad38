//! Avatar matcher: compatibility scoring between two avatar descriptors.
//!
//! Normalize → compare each attribute → aggregate primary and secondary groups →
//! weighted score, quality tier and pass/fail. Pure and stateless: no caches,
//! no I/O, safe to call from any number of threads.
// Module structure
pub mod analysis;
pub mod catalog;
pub mod models;
pub mod pipeline;

// Public types used by commands and callers
pub use catalog::{AttributeCategory, AvatarAttribute};
pub use models::avatar::{AvatarConfiguration, PartialAvatarConfiguration};
pub use models::result_summary::explain_match;
pub use models::types::{
    MatchBreakdown, MatchQuality, MatchResult, MatchingConfig, QualityTiers,
    DEFAULT_MATCH_THRESHOLD,
};

// Entry points
pub use analysis::normalizer::normalize;
pub use analysis::scoring::{aggregate_group, compare_attribute, GroupScore};
pub use pipeline::batch::{
    best_matching_post, filter_matching_posts, get_posts_with_match_scores, MatchablePost,
    ScoredPost,
};
pub use pipeline::full_pipeline::{compare_avatars, compare_normalized, compare_with_defaults};
pub use pipeline::quick_pipeline::{quick_match, quick_match_with_config};
