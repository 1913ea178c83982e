#![forbid(unsafe_code)]

//! Visibility flag for the persistent page banner.

use tracing::{debug, trace};

use crate::reactive::{Observable, Subscription};

/// Handle onto a single boolean. Clones share the flag.
#[derive(Debug, Clone)]
pub struct BannerVisibility {
    visible: Observable<bool>,
}

impl Default for BannerVisibility {
    /// Visible.
    fn default() -> Self {
        Self::new(true)
    }
}

impl BannerVisibility {
    #[must_use]
    pub fn new(visible: bool) -> Self {
        Self {
            visible: Observable::new(visible),
        }
    }

    /// Replace the flag. Writing the current value again changes nothing
    /// and does not notify.
    pub fn set_banner_visible(&self, visible: bool) {
        let changed = self.visible.mutate(|v| (*v != visible).then(|| *v = visible));
        match changed {
            Some(()) => debug!(visible, "banner visibility set"),
            None => trace!(visible, "banner visibility unchanged"),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.visible.version()
    }

    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
        self.visible.subscribe(move |v: &bool| callback(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn visible_by_default() {
        assert!(BannerVisibility::default().is_visible());
    }

    #[test]
    fn set_then_read() {
        let banner = BannerVisibility::default();
        banner.set_banner_visible(false);
        assert!(!banner.is_visible());
        banner.set_banner_visible(true);
        assert!(banner.is_visible());
        assert_eq!(banner.version(), 2);
    }

    #[test]
    fn repeated_value_does_not_notify() {
        let banner = BannerVisibility::new(false);
        let hits = Rc::new(Cell::new(0u32));
        let h = Rc::clone(&hits);
        let _sub = banner.subscribe(move |_| h.set(h.get() + 1));

        banner.set_banner_visible(false);
        assert_eq!(hits.get(), 0);
        banner.set_banner_visible(true);
        banner.set_banner_visible(true);
        assert_eq!(hits.get(), 1);
        assert_eq!(banner.version(), 1);
        assert!(banner.is_visible());
    }
}
