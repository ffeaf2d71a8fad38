//! Avatar attribute compatibility matching.
//!
//! A producer describes someone they noticed with an enumerable avatar
//! descriptor; a consumer later discovers that description by comparing it
//! against their own. `services::matcher` scores how well two independently
//! authored descriptors correspond to the same person.

pub mod commands;
pub mod services;
pub mod types;

pub use services::matcher::{
    compare_avatars, compare_with_defaults, explain_match, filter_matching_posts,
    get_posts_with_match_scores, normalize, quick_match, AvatarAttribute, AvatarConfiguration,
    MatchQuality, MatchResult, MatchablePost, MatchingConfig, PartialAvatarConfiguration,
};
pub use types::errors::{MatcherError, MatcherResult};
