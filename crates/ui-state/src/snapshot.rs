#![forbid(unsafe_code)]

//! Read-only copy of a session for presentation layers.

use crate::feedback::FeedbackEntry;

/// Point-in-time copy of every store in a [`UiSession`](crate::UiSession).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub feedback: Vec<FeedbackEntry>,
    pub refresh_count: u64,
    pub banner_visible: bool,
}
