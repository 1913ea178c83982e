//! End-to-end behavior of a session as a presentation layer would drive it.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use ui_state::{FeedbackId, SessionConfig, StoreError, UiSession};

fn ids(session: &UiSession) -> Vec<FeedbackId> {
    session
        .feedback()
        .with_entries(|list| list.iter().map(|e| e.id()).collect())
}

#[test]
fn add_add_remove_first() {
    let session = UiSession::default();
    let feedback = session.feedback();

    feedback.add_feedback("info", "ok", "saved");
    let first = feedback.entries()[0].clone();
    assert_eq!(first.id(), 1);
    assert!(first.is_new());
    assert_eq!(first.kind(), "info");
    assert_eq!(first.status(), "ok");
    assert_eq!(first.message(), "saved");

    feedback.add_feedback("error", "fail", "bad");
    assert_eq!(ids(&session), vec![1, 2]);

    feedback.remove_feedback(1);
    assert_eq!(ids(&session), vec![2]);
    assert_eq!(feedback.entries()[0].message(), "bad");
}

#[test]
fn unknown_removal_leaves_everything_alone() {
    let session = UiSession::default();
    let feedback = session.feedback();
    feedback.add_feedback("info", "ok", "a");
    feedback.add_feedback("info", "ok", "b");
    let before = session.snapshot();
    let version = feedback.version();

    assert!(feedback.remove_feedback(99).is_none());
    assert_eq!(
        feedback.try_remove_feedback(99).unwrap_err(),
        StoreError::UnknownFeedback(99)
    );
    assert_eq!(session.snapshot(), before);
    assert_eq!(feedback.version(), version);
}

#[test]
fn refresh_and_banner_round_out_the_session() {
    let session = UiSession::new(SessionConfig::default());
    for _ in 0..10 {
        session.refresh().refresh();
    }
    session.banner().set_banner_visible(false);

    let snap = session.snapshot();
    assert_eq!(snap.refresh_count, 10);
    assert!(!snap.banner_visible);
}

#[test]
fn view_rerenders_from_subscriptions() {
    let session = UiSession::default();
    let renders = Rc::new(RefCell::new(Vec::<String>::new()));

    let r = Rc::clone(&renders);
    let _fb = session.feedback().subscribe(move |list| {
        r.borrow_mut().push(format!("feedback:{}", list.len()));
    });
    let r = Rc::clone(&renders);
    let _rf = session
        .refresh()
        .subscribe(move |n| r.borrow_mut().push(format!("refresh:{n}")));
    let r = Rc::clone(&renders);
    let _bn = session
        .banner()
        .subscribe(move |v| r.borrow_mut().push(format!("banner:{v}")));

    session.feedback().add_feedback("success", "done", "ok");
    session.refresh().refresh();
    session.banner().set_banner_visible(false);
    session.feedback().remove_feedback(1);

    assert_eq!(
        *renders.borrow(),
        vec!["feedback:1", "refresh:1", "banner:false", "feedback:0"]
    );
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn mutations_are_logged_without_message_bodies() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let session = UiSession::default();
        session
            .feedback()
            .add_feedback("error", "fail", "password=hunter2");
        session.feedback().remove_feedback(5);
    });

    let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(out.contains("feedback added"));
    assert!(out.contains("unknown id"));
    assert!(!out.contains("hunter2"));
}

#[test]
fn snapshot_json_keeps_client_field_names() {
    let session = UiSession::default();
    session.feedback().add_feedback("info", "ok", "saved");
    session.refresh().refresh();

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "feedback": [
                {"id": 1, "isNew": true, "type": "info", "status": "ok", "message": "saved"}
            ],
            "refresh_count": 1,
            "banner_visible": true,
        })
    );

    let back: ui_state::SessionSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, session.snapshot());
}
