//! Compact card for the signed-in actor.

use leptos::prelude::*;

use crate::state::auth::use_session;

/// Avatar, name, phone, and role of the current identity. Renders nothing
/// when signed out.
#[component]
pub fn IdentityBadge() -> impl IntoView {
    let session = use_session();

    move || {
        session.snapshot.with(|s| {
            s.identity().map(|identity| {
                view! {
                    <div class="identity-badge">
                        <img class="identity-badge__avatar" src=identity.photo_url.clone() alt=identity.initials()/>
                        <div class="identity-badge__text">
                            <span class="identity-badge__name">{identity.name.clone()}</span>
                            <span class="identity-badge__phone">{identity.phone.clone()}</span>
                        </div>
                        <span class="role-badge">{identity.role.as_str()}</span>
                    </div>
                }
            })
        })
    }
}
