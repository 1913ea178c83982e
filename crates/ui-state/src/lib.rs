#![forbid(unsafe_code)]

//! Session-scoped reactive UI state.
//!
//! Three independent stores, each a cheap clonable handle onto shared
//! single-threaded state:
//!
//! - [`FeedbackRegistry`]: ordered notification entries with sequential ids.
//! - [`RefreshSignal`]: a counter that only goes up, used as a change token.
//! - [`BannerVisibility`]: whether the persistent banner is shown.
//!
//! [`UiSession`] owns one of each and is built explicitly from a
//! [`SessionConfig`]. Every store is backed by [`reactive::Observable`], so
//! consumers may either poll `version()` or subscribe to changes.
//!
//! All operations are synchronous and total. The stores are `!Send`: they
//! belong to the UI event loop that created them.

pub mod banner;
pub mod config;
pub mod error;
pub mod feedback;
pub mod reactive;
pub mod refresh;
pub mod session;
pub mod snapshot;

pub use banner::BannerVisibility;
pub use config::SessionConfig;
pub use error::StoreError;
pub use feedback::{FeedbackEntry, FeedbackId, FeedbackRegistry};
pub use reactive::{Observable, Subscription};
pub use refresh::RefreshSignal;
pub use session::UiSession;
pub use snapshot::SessionSnapshot;
