//! Error types for board operations
//!
//! Every error here is recoverable: the state machine discards the offending
//! event and stays where it was.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while mapping coordinates or handling drag events
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum BoardError {
    /// A transform or grid that cannot be used in a mapping calculation
    #[error("Domain error: {0}")]
    Domain(String),

    /// An event referenced an id that is not present where expected
    #[error("Unknown id: {id}")]
    UnknownId { id: String },

    /// Malformed event payload
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

impl BoardError {
    pub fn unknown_id(id: impl Into<String>) -> Self {
        BoardError::UnknownId { id: id.into() }
    }
}
