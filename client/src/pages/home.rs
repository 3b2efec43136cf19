//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_guard::{HideIfAuth, ShowIfAuth};
use crate::components::identity_badge::IdentityBadge;
use crate::state::auth::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="home-page">
            <h1>"Civic Connect"</h1>
            <p class="home-page__lead">"Follow elections, meet candidates, and volunteer in your community."</p>
            <HideIfAuth>
                <A href="/login" attr:class="login-button">
                    "Sign in with your phone"
                </A>
            </HideIfAuth>
            <ShowIfAuth>
                <IdentityBadge/>
                <button class="logout-button" type="button" on:click=move |_| session.logout()>
                    "Log out"
                </button>
            </ShowIfAuth>
        </section>
    }
}
