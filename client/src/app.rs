//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::left_sidebar_nav::LeftSidebarNav;
use crate::pages::{
    admin::AdminPage, candidate_dashboard::CandidateDashboardPage, home::HomePage, login::LoginPage,
};
use crate::state::auth::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. Session
/// restoration runs in an effect, so it happens once after mount in the
/// browser and never during server rendering.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session();
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/civic-connect.css"/>
        <Title text="Civic Connect"/>

        <Router>
            <div class="app-layout">
                <LeftSidebarNav/>
                <main class="app-main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                        <Route path=StaticSegment("candidate-dashboard") view=CandidateDashboardPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
