use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    #[error("Invalid value '{value}' for attribute '{attribute}'")]
    InvalidValue { attribute: String, value: String },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for MatcherError {
    fn from(error: std::io::Error) -> Self {
        MatcherError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(error: serde_json::Error) -> Self {
        MatcherError::Parse(error.to_string())
    }
}

impl Serialize for MatcherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type MatcherResult<T> = Result<T, MatcherError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
