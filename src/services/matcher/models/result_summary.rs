use crate::services::matcher::models::types::{MatchQuality, MatchResult};

/// Maximum number of features named in an explanation.
const MAX_EXPLAINED_FEATURES: usize = 3;
/// Maximum number of partial matches that may fill the explanation.
const MAX_EXPLAINED_PARTIALS: usize = 2;

const NO_MATCHING_FEATURES: &str = "No matching features found";

impl MatchQuality {
    /// Human-friendly tier label for the frontend.
    pub fn label(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "Excellent Match",
            MatchQuality::Good => "Good Match",
            MatchQuality::Fair => "Fair Match",
            MatchQuality::Poor => "Poor Match",
        }
    }

    /// Display colour (hex) for badges and score rings.
    pub fn color(&self) -> &'static str {
        match self {
            MatchQuality::Excellent => "#4CAF50",
            MatchQuality::Good => "#8BC34A",
            MatchQuality::Fair => "#FFC107",
            MatchQuality::Poor => "#F44336",
        }
    }
}

impl MatchResult {
    /// Short sentence naming the features that drove the match.
    pub fn explain(&self) -> String {
        explain_match(self)
    }
}

/// Build a sentence from up to three attribute labels.
///
/// Exact matches come first; partial matches ("similar X") only fill the
/// remaining slots and never more than two of them.
pub fn explain_match(result: &MatchResult) -> String {
    let exact = result
        .breakdown
        .matching_attributes
        .iter()
        .map(|attribute| attribute.label().to_string());
    let partial = result
        .breakdown
        .partial_match_attributes
        .iter()
        .take(MAX_EXPLAINED_PARTIALS)
        .map(|attribute| format!("similar {}", attribute.label()));

    let features: Vec<String> = exact.chain(partial).take(MAX_EXPLAINED_FEATURES).collect();
    if features.is_empty() {
        return NO_MATCHING_FEATURES.to_string();
    }

    capitalize_first(&format!("{} match", join_english_list(&features)))
}

/// "A", "A and B", "A, B, and C".
pub(crate) fn join_english_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../tests/models/result_summary_tests.rs"]
mod tests;
