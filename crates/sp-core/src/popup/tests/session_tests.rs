//! Tests for [`PopupSession`] seeding and snapshots.

use crate::content::{ContentFragment, ContentType};
use crate::popup::{PopupSession, PopupState};

#[test]
fn open_seeds_rule_actions_synchronously() {
    let session = PopupSession::open(ContentFragment::new(
        "https://a.com",
        ContentType::Url,
    ));

    assert_eq!(session.state, PopupState::Selecting);
    assert!(!session.actions.is_empty(), "popup must never open empty-handed");
    assert_eq!(session.actions[0].id, "open_browser");
    assert_eq!(session.actions[0].hotkey, "1");
    assert!(session.loading_suggestions);
    assert!(session.active_result.is_none());
    assert!(session.processing_action_id.is_none());
    assert!(!session.user_interacted);
}

#[test]
fn action_at_is_bounds_checked() {
    let session = PopupSession::open(ContentFragment::new("hello", ContentType::PlainText));

    assert!(session.action_at(0).is_some());
    assert!(session.action_at(session.actions.len()).is_none());
}

#[test]
fn snapshot_reflects_session_fields() {
    let mut session = PopupSession::open(ContentFragment::new("hello", ContentType::PlainText));
    session.user_interacted = true;
    session.loading_suggestions = false;

    let snapshot = session.snapshot();

    assert_eq!(snapshot.session_id, session.id);
    assert_eq!(snapshot.state, PopupState::Selecting);
    assert_eq!(snapshot.actions, session.actions);
    assert!(snapshot.user_interacted);
    assert!(!snapshot.loading_suggestions);
    assert_eq!(snapshot.content_type, ContentType::PlainText);
}

#[test]
fn snapshot_truncates_long_content() {
    let session = PopupSession::open(ContentFragment::new(
        "x".repeat(500),
        ContentType::PlainText,
    ));

    let snapshot = session.snapshot();
    assert!(snapshot.content_preview.len() <= 103); // 100 bytes + "..."
    assert!(snapshot.content_preview.ends_with("..."));
}
