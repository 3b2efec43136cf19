//! Left sidebar navigation with role-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar is always mounted. Links to role-gated pages appear only to
//! actors holding that role, mirroring `ShowIfAuth`; the page-level
//! `RequireRole` gate still applies when a URL is entered directly.

#[cfg(test)]
#[path = "left_sidebar_nav_test.rs"]
mod left_sidebar_nav_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use session::guard;
use session::{Role, SessionSnapshot};

use crate::state::auth::use_session;

/// Who a navigation link is shown to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Everyone,
    SignedOut,
    Roles(&'static [Role]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub audience: Audience,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", label: "Home", audience: Audience::Everyone },
    NavLink { href: "/login", label: "Sign In", audience: Audience::SignedOut },
    NavLink { href: "/admin", label: "Admin Panel", audience: Audience::Roles(&[Role::Admin]) },
    NavLink { href: "/candidate-dashboard", label: "Candidate Dashboard", audience: Audience::Roles(&[Role::Candidate]) },
];

/// `/` matches only itself; every other link also matches its sub-paths.
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || (href != "/" && pathname.starts_with(href))
}

/// Links the current actor may see. Nothing role-specific shows while loading.
pub fn visible_links(snapshot: &SessionSnapshot) -> Vec<NavLink> {
    NAV_LINKS
        .iter()
        .copied()
        .filter(|link| match link.audience {
            Audience::Everyone => true,
            Audience::SignedOut => guard::hide_if_authenticated(snapshot),
            Audience::Roles(roles) => guard::show_if_authenticated(snapshot, Some(roles)),
        })
        .collect()
}

#[component]
pub fn LeftSidebarNav() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let links = Memo::new(move |_| session.snapshot.with(visible_links));

    view! {
        <nav class="left-sidebar">
            <ul class="left-sidebar__menu">
                <For each=move || links.get() key=|link| link.href let:link>
                    <li class="left-sidebar__item">
                        <A
                            href=link.href
                            attr:class=move || {
                                if is_active(&pathname.get(), link.href) {
                                    "left-sidebar__link left-sidebar__link--active"
                                } else {
                                    "left-sidebar__link"
                                }
                            }
                        >
                            {link.label}
                        </A>
                    </li>
                </For>
            </ul>
        </nav>
    }
}
