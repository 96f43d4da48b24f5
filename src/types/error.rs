//! Error types

use reqwest::StatusCode;

/// Why a world page could not be turned into a snapshot
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("world id is empty")]
    EmptyId,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("og:title missing or empty")]
    MissingTitle,
    #[error("title not in \"<world> by <author>\" form: {0}")]
    TitleFormat(String),
}

/// Invalid runtime configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
