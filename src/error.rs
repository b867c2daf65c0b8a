// Error types for aocfetch.
// Covers remote fetch failures, credential handling, configuration and filesystem errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("authentication failed (HTTP {status}): session token is invalid or expired")]
    Unauthorized { status: u16 },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid day {0}: must be between 1 and 25")]
    InvalidDay(u32),

    #[error("session token contains characters not allowed in a header")]
    InvalidCredential,

    #[error("no session token was entered")]
    EmptyCredential,

    #[error("error reading config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AocError>;
