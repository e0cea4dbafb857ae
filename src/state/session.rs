//! Session store: the current user, derived from the persisted token.
//!
//! The token is the sole credential; it lives in localStorage and the user
//! object lives here for the page lifetime. Only this store writes either.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::util::storage;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and flips `false` once the startup session check
/// resolves, whatever its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Derive a username from a full name: the lowercased first whitespace
/// token plus a numeric suffix.
pub fn derive_username(full_name: &str, suffix: u16) -> String {
    let first = full_name.split_whitespace().next().unwrap_or("");
    format!("{}{suffix}", first.to_lowercase())
}

/// Random suffix in `0..1000` for derived usernames.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_suffix() -> u16 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Math::random() * 1000.0) as u16
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Injectable session service wrapping the reactive state and the API
/// client. Constructed once in `app.rs` and provided via context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    api: ApiClient,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            api,
        }
    }

    /// Reactive handle to the session state.
    pub fn state(self) -> RwSignal<SessionState> {
        self.state
    }

    /// Kick off the startup session check. Runs once, from the shell.
    pub fn init(self) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                self.check_session().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.state.update(|s| s.loading = false);
        }
    }

    /// Drop the in-memory session without touching the persisted token.
    pub fn dispose(self) {
        self.state.set(SessionState {
            user: None,
            loading: false,
        });
    }

    /// Validate the persisted token against `GET /users/me`.
    ///
    /// No token resolves to signed-out immediately. A rejected token is
    /// cleared silently; the shell just renders the sign-in form.
    pub async fn check_session(self) {
        if storage::token().is_none() {
            self.state.update(|s| s.loading = false);
            return;
        }
        match self.api.fetch_current_user().await {
            Ok(user) => self.state.update(|s| {
                s.user = Some(user);
                s.loading = false;
            }),
            Err(err) => {
                log::warn!("session check failed: {err}");
                storage::clear_token();
                self.state.update(|s| {
                    s.user = None;
                    s.loading = false;
                });
            }
        }
    }

    /// Register a new account. Does not authenticate; the caller decides
    /// what to show next.
    pub async fn sign_up(
        self,
        email: &str,
        password: &str,
        full_name: &str,
        username: Option<&str>,
    ) -> Result<(), String> {
        let derived;
        let username = match username {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                derived = derive_username(full_name, random_suffix());
                &derived
            }
        };
        self.api
            .register(email, password, username)
            .await
            .map_err(|e| e.to_string())
    }

    /// Exchange credentials for a token, persist it, then populate the
    /// session via [`Self::check_session`].
    pub async fn sign_in(self, email: &str, password: &str) -> Result<(), String> {
        let token = self
            .api
            .request_token(email, password)
            .await
            .map_err(|e| e.to_string())?;
        storage::set_token(&token);
        self.check_session().await;
        Ok(())
    }

    /// Clear the persisted token and the in-memory session. No network call.
    pub fn sign_out(self) {
        storage::clear_token();
        self.state.update(|s| s.user = None);
    }
}
