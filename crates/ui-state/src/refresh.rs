#![forbid(unsafe_code)]

//! Monotonic change token.
//!
//! Observers remember the last count they saw and re-fetch when it moves.
//! The number itself means nothing beyond "something changed".

use tracing::debug;

use crate::reactive::{Observable, Subscription};

/// Handle onto a counter that only ever goes up by one.
///
/// Starts at 0. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct RefreshSignal {
    count: Observable<u64>,
}

impl RefreshSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter by one and notify subscribers.
    pub fn refresh(&self) {
        self.count.mutate(|n| {
            *n = n.wrapping_add(1);
            Some(())
        });
        debug!(count = self.count(), "refresh signalled");
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// `true` when the counter has moved past a previously read value.
    #[must_use]
    pub fn has_changed_since(&self, seen: u64) -> bool {
        self.count() != seen
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.count.version()
    }

    pub fn subscribe(&self, callback: impl Fn(u64) + 'static) -> Subscription {
        self.count.subscribe(move |n: &u64| callback(*n))
    }
}
