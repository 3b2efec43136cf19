//! Admin panel route, restricted to `ADMIN`.

use leptos::prelude::*;
use session::Role;

use crate::components::auth_guard::RequireRole;
use crate::components::identity_badge::IdentityBadge;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RequireRole allowed={vec![Role::Admin]} redirect_to="/">
            <section class="admin-page">
                <h1>"Admin Panel"</h1>
                <p>"Manage users, moderate content, and maintain election events."</p>
                <IdentityBadge/>
            </section>
        </RequireRole>
    }
}
