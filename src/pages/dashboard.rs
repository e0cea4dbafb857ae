//! Extractor page: header plus the upload widget.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::extractor::Extractor;
use crate::state::session::SessionStore;

/// Main page — hosts the upload widget.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.state().get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="page page--dashboard">
            <Show
                when=move || !session.state().get().loading
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <header class="page__header">
                    <h1>"OCR Text Extractor"</h1>
                    <p>"Upload drawings and extract text with AI"</p>
                </header>
                <Extractor/>
            </Show>
        </div>
    }
}
