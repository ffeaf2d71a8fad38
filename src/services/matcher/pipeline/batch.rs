//! Batch ranking of posts against one consumer descriptor.
//!
//! Per-post scoring runs in parallel; ordering is re-applied afterwards with a
//! stable sort so tied posts keep their input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::services::matcher::analysis::normalizer::{foreign_value_attributes, normalize};
use crate::services::matcher::models::avatar::{AvatarConfiguration, PartialAvatarConfiguration};
use crate::services::matcher::models::types::{MatchResult, MatchingConfig};
use crate::services::matcher::pipeline::full_pipeline::compare_normalized;

/// Anything that carries an identifier and an optional target descriptor.
pub trait MatchablePost {
    fn post_id(&self) -> &str;
    /// `None` when the post never described anyone; scored as all-default.
    fn target_avatar(&self) -> Option<&PartialAvatarConfiguration>;
}

/// A post with its full comparison result attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPost<P> {
    pub post: P,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Score every post, no filtering, sorted by descending score (stable).
pub fn get_posts_with_match_scores<P>(
    candidate: Option<&PartialAvatarConfiguration>,
    posts: Vec<P>,
    config: &MatchingConfig,
) -> Vec<ScoredPost<P>>
where
    P: MatchablePost + Send,
{
    let candidate = normalize(candidate);
    let total = posts.len();

    let mut scored: Vec<ScoredPost<P>> = posts
        .into_par_iter()
        .map(|post| {
            let result = score_post(&post, &candidate, config);
            ScoredPost { post, result }
        })
        .collect();

    sort_scored_posts(&mut scored);

    log::debug!(
        "Scored {} posts (threshold={}, matches={})",
        total,
        config.threshold,
        scored.iter().filter(|entry| entry.result.is_match).count()
    );

    scored
}

/// Keep only posts that pass `config.threshold`, best first.
pub fn filter_matching_posts<P>(
    candidate: Option<&PartialAvatarConfiguration>,
    posts: Vec<P>,
    config: &MatchingConfig,
) -> Vec<P>
where
    P: MatchablePost + Send,
{
    get_posts_with_match_scores(candidate, posts, config)
        .into_iter()
        .filter(|entry| entry.result.is_match)
        .map(|entry| entry.post)
        .collect()
}

/// Highest-scoring matching post, first in input order on ties.
pub fn best_matching_post<P>(
    candidate: Option<&PartialAvatarConfiguration>,
    posts: Vec<P>,
    config: &MatchingConfig,
) -> Option<ScoredPost<P>>
where
    P: MatchablePost + Send,
{
    get_posts_with_match_scores(candidate, posts, config)
        .into_iter()
        .find(|entry| entry.result.is_match)
}

fn score_post<P: MatchablePost>(
    post: &P,
    candidate: &AvatarConfiguration,
    config: &MatchingConfig,
) -> MatchResult {
    let target = normalize(post.target_avatar());

    let foreign = foreign_value_attributes(&target);
    if !foreign.is_empty() {
        log::warn!(
            "Post {} has values outside the catalog for {:?}; they will not match",
            post.post_id(),
            foreign
        );
    }

    compare_normalized(&target, candidate, config.threshold, config)
}

/// Sort by score descending. `sort_by` is stable, ties keep input order.
fn sort_scored_posts<P>(scored: &mut [ScoredPost<P>]) {
    scored.sort_by(|a, b| b.result.score.cmp(&a.result.score));
}

#[cfg(test)]
#[path = "../tests/pipeline/batch_tests.rs"]
mod batch_tests;
