#![forbid(unsafe_code)]

//! Version-tracked shared cell with change notification.
//!
//! # Design
//!
//! [`Observable<T>`] keeps a value in `Rc<RefCell<..>>` so that every store
//! handle handed to a consumer points at the same state. There is one write
//! path, [`Observable::mutate`]: the closure edits the value in place and
//! says whether it changed anything. Only a reported change bumps the
//! version and reaches listeners, so no store ever clones or compares its
//! value to find out.
//!
//! Listeners are kept in a list keyed by a per-cell id. A [`Subscription`]
//! holds a weak handle back to the cell and removes its own entry when
//! dropped.
//!
//! | Operation     | Cost                                     |
//! |---------------|------------------------------------------|
//! | `with()`      | O(1) + closure                           |
//! | `get()`       | O(clone of T)                            |
//! | `mutate()`    | closure, plus O(L + clone of T) on change |
//! | `subscribe()` | O(1) amortized                           |
//! | drop guard    | O(L)                                     |
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: calling `mutate` from inside a listener or
//!   from inside another `mutate` closure on the same cell panics on the
//!   `RefCell` borrow. A listener that needs to write back must defer the
//!   write to the next event-loop turn.
//! - **Guard dropped mid-mutation**: a [`Subscription`] dropped while its
//!   cell is mutably borrowed cannot unregister and stays in the list.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct Listener<T> {
    id: u64,
    callback: Rc<dyn Fn(&T)>,
}

struct Slot<T> {
    value: T,
    version: u64,
    next_listener: u64,
    listeners: Vec<Listener<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Clones are handles onto the **same** value, version, and listener list.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .field("listeners", &slot.listeners.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Wrap `value`. The version starts at 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                version: 0,
                next_listener: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.slot.borrow().value)
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Edit the value in place.
    ///
    /// `f` returns `Some(r)` when it changed the value: the version goes up
    /// by one, every listener runs in subscription order with the new value,
    /// and `Some(r)` is handed back. `None` means the value was left as it
    /// was, and nothing else happens.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut T) -> Option<R>) -> Option<R> {
        let (out, value, listeners) = {
            let mut slot = self.slot.borrow_mut();
            let out = f(&mut slot.value)?;
            slot.version += 1;
            if slot.listeners.is_empty() {
                return Some(out);
            }
            let listeners: Vec<Rc<dyn Fn(&T)>> = slot
                .listeners
                .iter()
                .map(|l| Rc::clone(&l.callback))
                .collect();
            (out, slot.value.clone(), listeners)
        };
        tracing::trace!(listeners = listeners.len(), "observable changed");
        for callback in &listeners {
            callback(&value);
        }
        Some(out)
    }

    /// Register `callback` for future changes. It stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_listener;
            slot.next_listener += 1;
            slot.listeners.push(Listener {
                id,
                callback: Rc::new(callback),
            });
            id
        };
        let cell = Rc::downgrade(&self.slot);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(cell) = cell.upgrade()
                    && let Ok(mut slot) = cell.try_borrow_mut()
                {
                    slot.listeners.retain(|l| l.id != id);
                }
            })),
        }
    }

    /// Number of value-changing mutations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.slot.borrow().version
    }

    /// Listeners whose [`Subscription`] is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().listeners.len()
    }
}

/// Keeps a listener registered; dropping it unregisters the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
