//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Generation failures are classified into distinct variants so the CLI can
//! tell the user why an edit produced nothing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Request blocked: {0}")]
    BlockedRequest(String),

    #[error("Safety block: {0}")]
    SafetyBlocked(String),

    #[error("Generation stopped early: {0}")]
    AbnormalStop(String),

    #[error("Incomplete response: {0}")]
    IncompletePayload(String),

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;
