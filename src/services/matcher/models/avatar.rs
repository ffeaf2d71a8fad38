//! Avatar descriptors: the total `AvatarConfiguration` and the raw
//! `PartialAvatarConfiguration` it is normalized from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::services::matcher::catalog::{default_value, AvatarAttribute};

/// Raw, possibly incomplete descriptor as authored or stored.
///
/// Deserializes from a JSON object keyed by attribute token. Unknown keys and
/// non-string values (`null`, numbers, objects) are dropped so a malformed
/// record degrades instead of failing. String values are kept verbatim, even
/// tokens outside the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct PartialAvatarConfiguration {
    values: BTreeMap<AvatarAttribute, String>,
}

impl PartialAvatarConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, attribute: AvatarAttribute, value: impl Into<String>) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn set(&mut self, attribute: AvatarAttribute, value: impl Into<String>) {
        self.values.insert(attribute, value.into());
    }

    pub fn get(&self, attribute: AvatarAttribute) -> Option<&str> {
        self.values.get(&attribute).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AvatarAttribute, &str)> {
        self.values
            .iter()
            .map(|(attribute, value)| (*attribute, value.as_str()))
    }
}

impl From<BTreeMap<String, Value>> for PartialAvatarConfiguration {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut partial = PartialAvatarConfiguration::new();
        for (key, value) in raw {
            let Ok(attribute) = key.parse::<AvatarAttribute>() else {
                log::debug!("Dropping unknown avatar attribute '{key}'");
                continue;
            };
            match value {
                Value::String(value) => partial.set(attribute, value),
                Value::Null => {}
                other => log::debug!("Dropping non-string value for '{key}': {other}"),
            }
        }
        partial
    }
}

impl<S: Into<String>> FromIterator<(AvatarAttribute, S)> for PartialAvatarConfiguration {
    fn from_iter<I: IntoIterator<Item = (AvatarAttribute, S)>>(iter: I) -> Self {
        let mut partial = PartialAvatarConfiguration::new();
        for (attribute, value) in iter {
            partial.set(attribute, value);
        }
        partial
    }
}

impl Serialize for PartialAvatarConfiguration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

/// A complete descriptor: every catalog attribute holds exactly one value.
///
/// Only produced by normalization (or `Default`), so the totality invariant
/// holds for every instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PartialAvatarConfiguration")]
pub struct AvatarConfiguration {
    values: BTreeMap<AvatarAttribute, String>,
}

impl AvatarConfiguration {
    /// Fill every attribute missing from `partial` with its catalog default.
    pub(crate) fn from_partial(partial: Option<&PartialAvatarConfiguration>) -> Self {
        let values = AvatarAttribute::ALL
            .iter()
            .map(|attribute| {
                let value = partial
                    .and_then(|p| p.get(*attribute))
                    .unwrap_or_else(|| default_value(*attribute));
                (*attribute, value.to_string())
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, attribute: AvatarAttribute) -> &str {
        self.values
            .get(&attribute)
            .map(String::as_str)
            .unwrap_or_else(|| default_value(attribute))
    }

    /// Returns a copy with one attribute replaced.
    pub fn with(&self, attribute: AvatarAttribute, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(attribute, value.into());
        Self { values }
    }

    /// Attribute/value pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (AvatarAttribute, &str)> {
        self.values
            .iter()
            .map(|(attribute, value)| (*attribute, value.as_str()))
    }

    pub fn to_partial(&self) -> PartialAvatarConfiguration {
        PartialAvatarConfiguration {
            values: self.values.clone(),
        }
    }
}

impl Default for AvatarConfiguration {
    fn default() -> Self {
        Self::from_partial(None)
    }
}

impl From<PartialAvatarConfiguration> for AvatarConfiguration {
    fn from(partial: PartialAvatarConfiguration) -> Self {
        Self::from_partial(Some(&partial))
    }
}

impl From<&AvatarConfiguration> for PartialAvatarConfiguration {
    fn from(config: &AvatarConfiguration) -> Self {
        config.to_partial()
    }
}

impl Serialize for AvatarConfiguration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.values.serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../tests/models/avatar_tests.rs"]
mod tests;
