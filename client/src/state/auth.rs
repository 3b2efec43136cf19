//! Session context shared by every page and guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionContext`] per tab. Guards read the snapshot
//! signal; the login page and logout buttons call through to the store.
//!
//! DESIGN
//! ======
//! The store stays the single writer. It lives in a `StoredValue`, whose lock
//! serializes login/logout/initialize calls, and a listener copies every
//! snapshot it publishes into an `RwSignal` so components re-render on change
//! without ever holding the store itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{SessionEvent, SessionListener, SessionSnapshot, SessionStore};

use crate::util::navigation::WindowNavigator;
use crate::util::session_storage::BrowserSessionStorage;

/// Handle to the tab's session: a reactive snapshot plus the owning store.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub snapshot: RwSignal<SessionSnapshot>,
    store: StoredValue<SessionStore>,
}

impl SessionContext {
    /// Wrap `store`, mirroring its snapshots into a new signal.
    pub fn new(mut store: SessionStore) -> Self {
        let snapshot = RwSignal::new(store.snapshot().clone());
        store.add_listener(Arc::new(SignalListener { snapshot }));
        Self { snapshot, store: StoredValue::new(store) }
    }

    /// Context backed by the browser's `sessionStorage` and window navigation.
    pub fn browser() -> Self {
        Self::new(SessionStore::new(BrowserSessionStorage, WindowNavigator))
    }

    pub fn initialize(&self) {
        self.store.update_value(SessionStore::initialize);
    }

    pub fn login(&self, phone: &str, code: &str) -> bool {
        self.store.try_update_value(|store| store.login(phone, code)).unwrap_or(false)
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
    }
}

struct SignalListener {
    snapshot: RwSignal<SessionSnapshot>,
}

impl SessionListener for SignalListener {
    fn snapshot_changed(&self, snapshot: &SessionSnapshot) {
        self.snapshot.set(snapshot.clone());
    }

    fn event(&self, event: &SessionEvent) {
        log::debug!("session event: {event:?}");
    }
}

/// Create the browser session context and provide it to descendants.
pub fn provide_session() -> SessionContext {
    let session = SessionContext::browser();
    provide_context(session);
    session
}

/// Session context provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
