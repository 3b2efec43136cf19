use leptos::prelude::*;
use session::{ACCEPTED_OTP, MemoryStorage, Role};

use super::*;

fn context() -> SessionContext {
    SessionContext::new(SessionStore::new(MemoryStorage::new(), |_path: &str| {}))
}

#[test]
fn new_context_starts_loading() {
    let session = context();
    assert!(session.snapshot.get_untracked().is_loading());
}

#[test]
fn initialize_settles_signal() {
    let session = context();
    session.initialize();
    assert_eq!(session.snapshot.get_untracked(), SessionSnapshot::anonymous());
}

#[test]
fn login_and_logout_flow_through_signal() {
    let session = context();
    session.initialize();

    assert!(!session.login("+15551234567", "000000"));
    assert!(!session.snapshot.get_untracked().is_authenticated());

    assert!(session.login("+15551234567", ACCEPTED_OTP));
    assert_eq!(session.snapshot.get_untracked().role(), Role::Voter);

    session.logout();
    assert_eq!(session.snapshot.get_untracked(), SessionSnapshot::anonymous());
}
