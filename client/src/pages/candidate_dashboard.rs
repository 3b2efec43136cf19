//! Candidate dashboard route, restricted to `CANDIDATE`.

use leptos::prelude::*;
use session::Role;

use crate::components::auth_guard::RequireRole;
use crate::components::identity_badge::IdentityBadge;

#[component]
pub fn CandidateDashboardPage() -> impl IntoView {
    view! {
        <RequireRole allowed={vec![Role::Candidate]} redirect_to="/">
            <section class="candidate-dashboard">
                <h1>"Candidate Dashboard"</h1>
                <p>"Monitor your volunteers and coordinate group chats."</p>
                <IdentityBadge/>
            </section>
        </RequireRole>
    }
}
