//! Attribute domain catalog.
//!
//! Flat lookup tables keyed by `AvatarAttribute`: legal values, defaults,
//! primary/secondary category and similarity groups. Behaviour per attribute
//! is data, not code, so the comparator stays a single function.

pub mod attributes;
pub mod similarity;
pub mod values;

pub use attributes::{primary_attributes, secondary_attributes, AttributeCategory, AvatarAttribute};
pub use similarity::{are_related, similarity_groups};
pub use values::{default_value, is_legal_value, legal_values, same_token};

use crate::services::matcher::models::avatar::{AvatarConfiguration, PartialAvatarConfiguration};
use crate::types::errors::{MatcherError, MatcherResult};

/// The all-default descriptor, i.e. what an absent descriptor normalizes to.
pub fn default_configuration() -> AvatarConfiguration {
    AvatarConfiguration::default()
}

/// Strict check that every supplied value belongs to its attribute's enumeration.
///
/// The matcher never calls this; unknown tokens simply score 0 there. Intended for
/// authoring surfaces that want to reject a descriptor up front.
pub fn validate_configuration(partial: &PartialAvatarConfiguration) -> MatcherResult<()> {
    for (attribute, value) in partial.iter() {
        if !is_legal_value(attribute, value) {
            return Err(MatcherError::InvalidValue {
                attribute: attribute.key().to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/catalog/catalog_tests.rs"]
mod tests;
