pub mod loader;

pub use loader::{load_matching_config, read_matching_config, MATCHING_CONFIG_FILE};
