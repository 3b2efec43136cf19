//! Role gates and visibility wrappers driven by the session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap protected content in [`RequireRole`], and auth-dependent chrome
//! (login form, logout button) in [`HideIfAuth`] / [`ShowIfAuth`]. The
//! decisions themselves live in `session::guard`; these components only
//! render them and issue the redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::guard::{self, DEFAULT_FALLBACK, GuardDecision};
use session::Role;

use crate::state::auth::use_session;

/// Render `children` only for permitted roles.
///
/// Shows a spinner while the session is loading. A signed-in actor whose role
/// is not in `allowed` sees a placeholder and is sent to `redirect_to` once
/// the current render has finished. Actors with no identity are let through.
#[component]
pub fn RequireRole(
    children: ChildrenFn,
    #[prop(into)] allowed: Vec<Role>,
    #[prop(optional, into)] redirect_to: Option<String>,
) -> impl IntoView {
    let session = use_session();
    let fallback = redirect_to.unwrap_or_else(|| DEFAULT_FALLBACK.to_owned());
    let decision = Memo::new(move |_| session.snapshot.with(|s| guard::require_role(s, &allowed, &fallback)));

    // Navigating from an effect keeps the redirect out of the render pass.
    let navigate = use_navigate();
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="guard-status">
                <span class="spinner" aria-label="Loading"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! {
            <div class="guard-status">
                <p>"Redirecting (Access Denied)..."</p>
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Render => children().into_any(),
    }
}

/// Render `children` only once the session has settled with no identity.
#[component]
pub fn HideIfAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let visible = Memo::new(move |_| session.snapshot.with(guard::hide_if_authenticated));
    move || visible.get().then(|| children())
}

/// Render `children` only for a signed-in actor, optionally limited to `roles`.
#[component]
pub fn ShowIfAuth(children: ChildrenFn, #[prop(optional)] roles: Option<Vec<Role>>) -> impl IntoView {
    let session = use_session();
    let visible = Memo::new(move |_| session.snapshot.with(|s| guard::show_if_authenticated(s, roles.as_deref())));
    move || visible.get().then(|| children())
}
