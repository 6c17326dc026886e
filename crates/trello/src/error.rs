//! Error type shared by every Trello operation.

use thiserror::Error;

/// Errors that can occur while talking to the Trello API.
#[derive(Error, Debug)]
pub enum TrelloError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response. Body is passed through as-is.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A caller-supplied argument was rejected before any request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required field was missing or blank on a create input.
    #[error("{entity} requires `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// Power-up name outside the supported set.
    #[error("Invalid power-up `{0}`: expected one of voting, cardAging, calendar, recap")]
    InvalidPowerUp(String),
}

impl TrelloError {
    /// Whether the error was raised locally, before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::InvalidArgument(_)
                | Self::MissingField { .. }
                | Self::InvalidPowerUp(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrelloError>;

/// Characters that would let an id escape its path segment.
const RESERVED_ID_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Reject identifiers that are blank or would not stay a single path
/// segment once interpolated.
pub(crate) fn require_id<'a>(what: &str, id: &'a str) -> Result<&'a str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(TrelloError::InvalidArgument(format!(
            "{what} id must not be empty"
        )));
    }
    if trimmed.contains(&RESERVED_ID_CHARS[..]) || trimmed.contains("..") {
        return Err(TrelloError::InvalidArgument(format!(
            "{what} id `{trimmed}` is not a single path segment"
        )));
    }
    Ok(trimmed)
}

/// Reject a blank required field on a create input.
pub(crate) fn require_field(entity: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrelloError::MissingField { entity, field });
    }
    Ok(())
}
