#![forbid(unsafe_code)]

//! Errors surfaced by the stores and their configuration.

use crate::feedback::FeedbackId;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No feedback entry carries this id (never issued, or already removed).
    UnknownFeedback(FeedbackId),
    /// A configuration value could not be parsed.
    InvalidConfig { key: String, value: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFeedback(id) => write!(f, "no feedback entry with id {id}"),
            Self::InvalidConfig { key, value } => {
                write!(f, "invalid value '{value}' for {key}")
            }
        }
    }
}

impl std::error::Error for StoreError {}
