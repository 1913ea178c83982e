#![forbid(unsafe_code)]

//! Ordered registry of user-visible feedback messages.
//!
//! Presentation layers push success/error notices with
//! [`FeedbackRegistry::add_feedback`] and dismiss them by id with
//! [`FeedbackRegistry::remove_feedback`].
//!
//! # Invariants
//!
//! 1. Ids start at 1 and increase by exactly 1 per insertion. They are never
//!    reused, even after the entry holding them is removed.
//! 2. Entries keep insertion order. Removal deletes at most one entry and
//!    leaves the relative order of the rest intact.
//! 3. Entries are immutable once stored.
//! 4. Every entry is created with `is_new == true`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown id | Never issued, or already removed | `remove_feedback` returns `None`, nothing changes |
//! | Unknown id (strict) | Same | `try_remove_feedback` returns [`StoreError::UnknownFeedback`] |

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::error::StoreError;
use crate::reactive::{Observable, Subscription};

/// Identifier assigned to a feedback entry.
pub type FeedbackId = u64;

/// A single notification record, tracked until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackEntry {
    id: FeedbackId,
    #[cfg_attr(feature = "serde", serde(rename = "isNew"))]
    is_new: bool,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    status: String,
    message: String,
}

impl FeedbackEntry {
    #[must_use]
    pub fn id(&self) -> FeedbackId {
        self.id
    }

    /// Always `true`: nothing marks an entry as seen.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Caller-supplied classification (e.g. `"error"`, `"success"`).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle onto an ordered, observable list of [`FeedbackEntry`] values.
///
/// Clones share the list and the id counter.
#[derive(Debug, Clone, Default)]
pub struct FeedbackRegistry {
    entries: Observable<Vec<FeedbackEntry>>,
    last_id: Rc<Cell<FeedbackId>>,
}

impl FeedbackRegistry {
    /// Create an empty registry. The first id handed out is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry and return its id.
    ///
    /// Arguments are stored verbatim; there is no validation and no
    /// deduplication.
    pub fn add_feedback(
        &self,
        kind: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> FeedbackId {
        let id = self.last_id.get() + 1;
        self.last_id.set(id);

        let entry = FeedbackEntry {
            id,
            is_new: true,
            kind: kind.into(),
            status: status.into(),
            message: message.into(),
        };
        debug!(id, kind = %entry.kind, status = %entry.status, "feedback added");

        self.entries.mutate(|list| {
            list.push(entry);
            Some(())
        });
        id
    }

    /// Remove the first entry carrying `id` and return it.
    ///
    /// An unknown id is a no-op: the list, its version and its subscribers
    /// are left alone and `None` comes back.
    pub fn remove_feedback(&self, id: FeedbackId) -> Option<FeedbackEntry> {
        let removed = self.entries.mutate(|list| {
            let pos = list.iter().position(|e| e.id == id)?;
            Some(list.remove(pos))
        });
        match &removed {
            Some(_) => debug!(id, "feedback removed"),
            None => debug!(id, "feedback remove ignored: unknown id"),
        }
        removed
    }

    /// Like [`remove_feedback`](Self::remove_feedback), but an unknown id is
    /// reported as [`StoreError::UnknownFeedback`].
    pub fn try_remove_feedback(&self, id: FeedbackId) -> Result<FeedbackEntry, StoreError> {
        self.remove_feedback(id).ok_or(StoreError::UnknownFeedback(id))
    }

    /// Snapshot of the current entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> Vec<FeedbackEntry> {
        self.entries.get()
    }

    /// Borrow the entries without cloning them.
    pub fn with_entries<R>(&self, f: impl FnOnce(&[FeedbackEntry]) -> R) -> R {
        self.entries.with(|list| f(list))
    }

    /// Clone of the entry carrying `id`, if still present.
    #[must_use]
    pub fn get(&self, id: FeedbackId) -> Option<FeedbackEntry> {
        self.entries.with(|list| list.iter().find(|e| e.id == id).cloned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.with(Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.with(Vec::is_empty)
    }

    /// Most recently issued id, or 0 before the first insertion.
    #[must_use]
    pub fn last_id(&self) -> FeedbackId {
        self.last_id.get()
    }

    /// Bumped on every insertion and every successful removal.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.entries.version()
    }

    /// Call `callback` with the full list after every change.
    pub fn subscribe(&self, callback: impl Fn(&[FeedbackEntry]) + 'static) -> Subscription {
        self.entries.subscribe(move |list: &Vec<FeedbackEntry>| callback(list))
    }
}
