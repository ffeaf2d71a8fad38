pub mod config;
pub mod matcher;
