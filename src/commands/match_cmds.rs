//! Serde-facing entry points for presentation layers.
//!
//! Unlike the matcher itself these validate what the caller supplies and
//! return `MatcherResult`, so a bad request surfaces as an error string
//! instead of a silently degraded score.

use serde::{Deserialize, Serialize};

use crate::services::matcher::{
    self, MatchResult, MatchablePost, MatchingConfig, PartialAvatarConfiguration,
};
use crate::types::errors::MatcherResult;

/// Single-pair comparison request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub target: Option<PartialAvatarConfiguration>,
    #[serde(default)]
    pub candidate: Option<PartialAvatarConfiguration>,
    /// Falls back to `config.threshold`.
    #[serde(default)]
    pub threshold: Option<u8>,
    #[serde(default)]
    pub config: Option<MatchingConfig>,
}

/// Concrete post shape for JSON callers. Unrelated fields are carried in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_avatar: Option<PartialAvatarConfiguration>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MatchablePost for PostRecord {
    fn post_id(&self) -> &str {
        &self.id
    }

    fn target_avatar(&self) -> Option<&PartialAvatarConfiguration> {
        self.target_avatar.as_ref()
    }
}

/// Batch ranking request: one consumer descriptor against many posts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    #[serde(default)]
    pub candidate: Option<PartialAvatarConfiguration>,
    pub posts: Vec<PostRecord>,
    #[serde(default)]
    pub config: Option<MatchingConfig>,
    /// Drop posts that do not pass the threshold.
    #[serde(default)]
    pub only_matches: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPost {
    pub post_id: String,
    #[serde(rename = "match")]
    pub result: MatchResult,
    pub explanation: String,
}

fn resolve_config(config: Option<MatchingConfig>) -> MatcherResult<MatchingConfig> {
    let config = config.unwrap_or_default();
    config.validate()?;
    Ok(config)
}

pub fn compare_avatars_cmd(request: CompareRequest) -> MatcherResult<MatchResult> {
    let config = resolve_config(request.config)?;
    let threshold = request.threshold.unwrap_or(config.threshold);

    Ok(matcher::compare_avatars(
        request.target.as_ref(),
        request.candidate.as_ref(),
        threshold,
        &config,
    ))
}

pub fn quick_match_cmd(request: CompareRequest) -> MatcherResult<bool> {
    let config = resolve_config(request.config)?;
    let threshold = request.threshold.unwrap_or(config.threshold);

    Ok(matcher::quick_match_with_config(
        request.target.as_ref(),
        request.candidate.as_ref(),
        threshold,
        &config,
    ))
}

pub fn rank_posts_cmd(request: RankRequest) -> MatcherResult<Vec<RankedPost>> {
    let config = resolve_config(request.config)?;
    let only_matches = request.only_matches;

    log::info!(
        "rank_posts_cmd: {} posts (only_matches={})",
        request.posts.len(),
        only_matches
    );

    let scored =
        matcher::get_posts_with_match_scores(request.candidate.as_ref(), request.posts, &config);
    let ranked = scored
        .into_iter()
        .filter(|entry| !only_matches || entry.result.is_match)
        .map(|entry| RankedPost {
            post_id: entry.post.id,
            explanation: entry.result.explain(),
            result: entry.result,
        })
        .collect();

    Ok(ranked)
}

pub fn explain_match_cmd(request: CompareRequest) -> MatcherResult<String> {
    compare_avatars_cmd(request).map(|result| result.explain())
}

#[cfg(test)]
#[path = "tests/match_cmds_tests.rs"]
mod tests;
