//! Descriptor normalization.
//!
//! Turns any partial (or absent) descriptor into a total `AvatarConfiguration`
//! so the comparator never sees a missing attribute.

use crate::services::matcher::catalog::{is_legal_value, AvatarAttribute};
use crate::services::matcher::models::avatar::{AvatarConfiguration, PartialAvatarConfiguration};

/// Fill gaps with catalog defaults; caller-supplied values are kept verbatim.
///
/// `None` yields the all-default configuration. Never fails.
pub fn normalize(partial: Option<&PartialAvatarConfiguration>) -> AvatarConfiguration {
    AvatarConfiguration::from_partial(partial)
}

/// Attributes whose value is outside the catalog enumeration.
///
/// Such values are legal input (they just never match); batch callers use this
/// to log suspicious records.
pub fn foreign_value_attributes(config: &AvatarConfiguration) -> Vec<AvatarAttribute> {
    config
        .iter()
        .filter(|(attribute, value)| !is_legal_value(*attribute, value))
        .map(|(attribute, _)| attribute)
        .collect()
}

#[cfg(test)]
#[path = "../tests/analysis/normalizer_tests.rs"]
mod tests;
