#![forbid(unsafe_code)]

//! Explicitly owned bundle of the three stores.
//!
//! A [`UiSession`] is built once when the UI starts and passed by reference
//! (or as cloned store handles) to whatever renders from it. There is no
//! global registry: the state lives exactly as long as the session and the
//! handles cloned from it.

use tracing::info;

use crate::banner::BannerVisibility;
use crate::config::SessionConfig;
use crate::feedback::FeedbackRegistry;
use crate::refresh::RefreshSignal;
use crate::snapshot::SessionSnapshot;

/// Owner of one feedback registry, one refresh signal, and one banner flag.
#[derive(Debug)]
pub struct UiSession {
    feedback: FeedbackRegistry,
    refresh: RefreshSignal,
    banner: BannerVisibility,
}

impl Default for UiSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl UiSession {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        info!(banner_visible = config.banner_visible, "ui session created");
        Self {
            feedback: FeedbackRegistry::new(),
            refresh: RefreshSignal::new(),
            banner: BannerVisibility::new(config.banner_visible),
        }
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackRegistry {
        &self.feedback
    }

    #[must_use]
    pub fn refresh(&self) -> &RefreshSignal {
        &self.refresh
    }

    #[must_use]
    pub fn banner(&self) -> &BannerVisibility {
        &self.banner
    }

    /// Copy of all three stores as they are right now.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            feedback: self.feedback.entries(),
            refresh_count: self.refresh.count(),
            banner_visible: self.banner.is_visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_blank() {
        let session = UiSession::default();
        let snap = session.snapshot();
        assert!(snap.feedback.is_empty());
        assert_eq!(snap.refresh_count, 0);
        assert!(snap.banner_visible);
    }

    #[test]
    fn config_sets_initial_banner() {
        let session = UiSession::new(SessionConfig::default().with_banner_visible(false));
        assert!(!session.banner().is_visible());
    }

    #[test]
    fn stores_are_independent() {
        let session = UiSession::default();
        session.feedback().add_feedback("info", "ok", "saved");

        assert_eq!(session.refresh().count(), 0);
        assert_eq!(session.refresh().version(), 0);
        assert_eq!(session.banner().version(), 0);
    }

    #[test]
    fn cloned_handles_write_through() {
        let session = UiSession::default();
        let feedback = session.feedback().clone();
        let refresh = session.refresh().clone();

        feedback.add_feedback("error", "fail", "bad");
        refresh.refresh();

        let snap = session.snapshot();
        assert_eq!(snap.feedback.len(), 1);
        assert_eq!(snap.refresh_count, 1);
    }
}
