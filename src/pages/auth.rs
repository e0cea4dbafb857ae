//! Sign-in / sign-up page.
//!
//! One form with a tab per mode. Failures render inline; a successful
//! sign-up does not authenticate, it switches back to the sign-in tab with
//! a notice.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Auth page — redirects home once a session exists.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.state().get();
        if !state.loading && state.user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        error.set(None);
        notice.set(None);
    };

    let tab_class = move |tab: AuthMode| {
        move || {
            if mode.get() == tab {
                "auth__tab auth__tab--active"
            } else {
                "auth__tab"
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            notice.set(None);
            leptos::task::spawn_local(async move {
                let outcome = match mode.get_untracked() {
                    AuthMode::SignIn => {
                        session
                            .sign_in(&email.get_untracked(), &password.get_untracked())
                            .await
                    }
                    AuthMode::SignUp => {
                        let chosen = username.get_untracked();
                        let chosen = chosen.trim();
                        let result = session
                            .sign_up(
                                &email.get_untracked(),
                                &password.get_untracked(),
                                &full_name.get_untracked(),
                                (!chosen.is_empty()).then_some(chosen),
                            )
                            .await;
                        if result.is_ok() {
                            mode.set(AuthMode::SignIn);
                            notice.set(Some(
                                "Account created. Sign in to continue.".to_owned(),
                            ));
                        }
                        result
                    }
                };
                if let Err(message) = outcome {
                    error.set(Some(message));
                }
                busy.set(false);
            });
        }
    };

    let submit_label = move || {
        if busy.get() {
            "Please wait..."
        } else {
            match mode.get() {
                AuthMode::SignIn => "Sign In",
                AuthMode::SignUp => "Create Account",
            }
        }
    };

    view! {
        <div class="auth">
            <div class="auth__card">
                <h1 class="auth__title">"EngiDraw Data"</h1>
                <p class="auth__subtitle">"Engineering drawing analysis"</p>

                <div class="auth__tabs">
                    <button
                        class=tab_class(AuthMode::SignIn)
                        on:click=move |_| switch_mode(AuthMode::SignIn)
                    >
                        "Sign In"
                    </button>
                    <button
                        class=tab_class(AuthMode::SignUp)
                        on:click=move |_| switch_mode(AuthMode::SignUp)
                    >
                        "Sign Up"
                    </button>
                </div>

                <Show when=move || notice.get().is_some()>
                    <div class="banner banner--notice">
                        {move || notice.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="auth__form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <label class="auth__label">
                            "Full Name"
                            <input
                                class="auth__input"
                                type="text"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth__label">
                            "Username (optional)"
                            <input
                                class="auth__input"
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <label class="auth__label">
                        "Email"
                        <input
                            class="auth__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth__label">
                        "Password"
                        <input
                            class="auth__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || error.get().is_some()>
                        <div class="banner banner--error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        class="btn btn--primary auth__submit"
                        type="submit"
                        disabled=move || busy.get()
                    >
                        {submit_label}
                    </button>
                </form>
            </div>
        </div>
    }
}
