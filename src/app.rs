//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage, history::HistoryPage};
use crate::state::session::SessionStore;
use crate::state::theme::ThemeStore;

/// Root application component.
///
/// Constructs the shared services once, provides them via context, and sets
/// up client-side routing behind the auth gate each page enforces.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(&ApiConfig::default());
    let session = SessionStore::new(api);
    let theme = ThemeStore::new();

    provide_context(api);
    provide_context(session);
    provide_context(theme);

    session.init();
    theme.init();

    view! {
        <Title text="EngiDraw Data"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=AuthPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
