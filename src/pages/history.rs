//! Scan history page: one expandable card per past analysis.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::history::{
    HistoryState, display_field_value, format_timestamp, format_weight_kg,
};
use crate::state::session::SessionStore;
use crate::state::upload::field_label;

/// History page — fetches the list once on mount.
/// Redirects to `/login` if the user is not authenticated.
#[component]
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.state().get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let history = RwSignal::new(HistoryState::default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match api.fetch_history().await {
                Ok(entries) => history.update(|h| h.loaded(entries)),
                Err(err) => {
                    log::warn!("history fetch failed: {err}");
                    history.update(|h| h.failed(err.to_string()));
                }
            }
        });
    }

    view! {
        <div class="page page--history">
            <header class="page__header">
                <h1>"Scan History"</h1>
                <p>"View your previous drawing analyses"</p>
            </header>

            <Show
                when=move || !history.with(|h| h.loading)
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || history.with(|h| h.error.is_none())
                    fallback=move || {
                        view! {
                            <div class="banner banner--error">
                                {move || history.with(|h| h.error.clone().unwrap_or_default())}
                            </div>
                        }
                    }
                >
                    <Show
                        when=move || history.with(|h| !h.entries.is_empty())
                        fallback=|| {
                            view! {
                                <div class="history__empty">
                                    "No scans found yet. Start by analyzing a drawing!"
                                </div>
                            }
                        }
                    >
                        <div class="history__list">
                            {move || {
                                history
                                    .with(|h| {
                                        h.entries
                                            .iter()
                                            .map(|entry| {
                                                let weight =
                                                    format_weight_kg(entry.calculated_weight_kg);
                                                let fields = entry
                                                    .extracted_data
                                                    .iter()
                                                    .map(|(key, value)| {
                                                        view! {
                                                            <div class="history__field">
                                                                <p class="history__field-key">{field_label(key)}</p>
                                                                <p class="history__field-value">
                                                                    {display_field_value(value)}
                                                                </p>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>();
                                                view! {
                                                    <div class="history__card">
                                                        <div class="history__summary">
                                                            <div class="history__meta">
                                                                <h3 class="history__filename">
                                                                    {entry.filename.clone()}
                                                                </h3>
                                                                <span class="history__timestamp">
                                                                    {format_timestamp(&entry.timestamp)}
                                                                </span>
                                                            </div>
                                                            <div class="history__weight">
                                                                <span class="history__weight-label">
                                                                    "Calculated Weight"
                                                                </span>
                                                                <span class="history__weight-value">
                                                                    {format!("{weight} kg")}
                                                                </span>
                                                            </div>
                                                        </div>
                                                        <details class="history__details">
                                                            <summary class="history__details-toggle">
                                                                "View Extracted Data"
                                                            </summary>
                                                            <div class="history__fields">{fields}</div>
                                                        </details>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
