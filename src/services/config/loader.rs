//! Matching settings loaded from `matching.json`, with fallback to defaults.

use std::path::Path;

use crate::services::matcher::MatchingConfig;
use crate::types::errors::MatcherResult;

/// File name looked up inside the settings directory.
pub const MATCHING_CONFIG_FILE: &str = "matching.json";

/// Strict read: returns an error for a missing, corrupt or invalid file.
///
/// Absent fields take their defaults, so `{"threshold": 70}` is a valid file.
pub fn read_matching_config(path: &Path) -> MatcherResult<MatchingConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: MatchingConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load `<settings_dir>/matching.json`.
/// Falls back to `MatchingConfig::default()` if the file is missing, corrupt or
/// fails validation. Log WARN.
pub fn load_matching_config(settings_dir: &Path) -> MatchingConfig {
    let config_path = settings_dir.join(MATCHING_CONFIG_FILE);

    log::info!("Loading matching config from: {}", config_path.display());

    match read_matching_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!(
                "Matching config unusable at {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            MatchingConfig::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
