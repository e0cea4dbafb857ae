//! Application shell: top navigation bar and footer around the active page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;
use crate::state::theme::{Theme, ThemeStore};

/// Navigation shell. Shows the view switcher and user chip only while a
/// session exists; the theme toggle is always available.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let theme = expect_context::<ThemeStore>();
    let pathname = use_location().pathname;

    let signed_in = move || session.state().get().user.is_some();
    let username = move || {
        session
            .state()
            .get()
            .user
            .map_or_else(String::new, |u| {
                if u.username.is_empty() { u.email } else { u.username }
            })
    };

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav__link nav__link--active"
            } else {
                "nav__link"
            }
        }
    };

    let theme_icon = move || match theme.theme().get() {
        Theme::Light => "\u{263d}",
        Theme::Dark => "\u{2600}",
    };

    let on_toggle_theme = move |_| theme.toggle();

    let on_sign_out = move |_| {
        session.sign_out();
        #[cfg(feature = "hydrate")]
        {
            // Navigate via window.location for a clean state.
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        }
    };

    view! {
        <div class="shell">
            <nav class="nav">
                <div class="nav__brand">
                    <span class="nav__logo">"\u{25a6}"</span>
                    <span class="nav__title">"EngiDraw Data"</span>
                </div>

                <Show when=signed_in>
                    <div class="nav__links">
                        <a href="/" class=link_class("/")>
                            "Dashboard"
                        </a>
                        <a href="/history" class=link_class("/history")>
                            "History"
                        </a>
                    </div>
                </Show>

                <div class="nav__actions">
                    <button
                        class="nav__theme-toggle"
                        on:click=on_toggle_theme
                        aria-label="Toggle theme"
                    >
                        {theme_icon}
                    </button>

                    <Show when=signed_in>
                        <span class="nav__user">{username}</span>
                        <button class="nav__sign-out" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </nav>

            <main class="shell__main">{children()}</main>

            <footer class="shell__footer">
                "EngiDraw Data - Engineering Data Calculations with precision"
            </footer>
        </div>
    }
}
