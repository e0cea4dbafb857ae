//! localStorage persistence for the bearer token and theme preference.
//!
//! All reads and writes require a browser environment and are gated behind
//! the `hydrate` feature; on the host they degrade to `None`/no-op so the
//! state machines stay testable without a DOM.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "engidraw_token";
#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "engidraw_theme";

/// Read the persisted bearer token, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read(TOKEN_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        write(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        remove(TOKEN_KEY);
    }
}

/// Read the persisted theme preference string, if any.
pub fn theme() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        read(THEME_KEY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the theme preference string.
pub fn set_theme(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        write(THEME_KEY, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

#[cfg(feature = "hydrate")]
fn read(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(feature = "hydrate")]
fn write(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(feature = "hydrate")]
fn remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
