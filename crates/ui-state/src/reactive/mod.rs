#![forbid(unsafe_code)]

//! Change-tracking primitive shared by every store.
//!
//! - [`Observable`]: shared value with a version counter and listener
//!   callbacks.
//! - [`Subscription`]: guard that unregisters its listener on drop.
//!
//! # Invariants
//!
//! 1. The version increments exactly once per mutation that reports a
//!    change, and never otherwise.
//! 2. Listeners run in subscription order.
//! 3. A dropped [`Subscription`] is never called again.

pub mod observable;

pub use observable::{Observable, Subscription};
