//! Typed HTTP client for the backend REST API and the analysis workflow.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning errors since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into a single [`ApiError`] carrying a
//! display string: transport failures, non-2xx responses (using the
//! server's `detail` field when the body parses as JSON), and undecodable
//! success bodies. One attempt per call; no retry, no timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::net::types::AnalysisResult;
use crate::net::types::{HistoryEntry, User};

/// Fallback shown when the server supplies no usable error message.
const GENERIC_FAILURE: &str = "API request failed";

/// Single error kind for the whole HTTP boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ApiError(pub String);

impl ApiError {
    #[cfg(not(feature = "hydrate"))]
    fn offline() -> Self {
        Self("not available on server".to_owned())
    }
}

/// Derive the display message for a non-2xx response from its raw body.
///
/// The backend reports failures as `{"detail": "..."}`; anything else
/// (empty body, non-JSON, missing or non-string `detail`) falls back to a
/// generic message.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(ToOwned::to_owned))
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    username: &'a str,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Stateless HTTP client bound to the configured base URLs.
///
/// The bearer token is read from storage on every request rather than held
/// here, so a sign-out invalidates all subsequent calls immediately.
#[derive(Clone, Copy, Debug)]
pub struct ApiClient {
    pub base_url: &'static str,
    pub workflow_url: &'static str,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            workflow_url: config.workflow_url,
        }
    }

    /// Fetch the currently authenticated user from `GET /users/me`.
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::get(&self.url("/users/me")))
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::offline())
        }
    }

    /// Register a new account via `POST /users/register`.
    ///
    /// The backend echoes the created user; the client only cares that the
    /// call succeeded.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            email,
            password,
            username,
        };
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url("/users/register"))
                .json(&body)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ApiError::offline())
        }
    }

    /// Exchange credentials for a bearer token via `POST /users/token`.
    ///
    /// The endpoint expects the OAuth2 password-grant form shape: the email
    /// goes in the `username` field.
    pub async fn request_token(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new()
                .map_err(|_| ApiError(GENERIC_FAILURE.to_owned()))?;
            let _ = form.append_with_str("username", email);
            let _ = form.append_with_str("password", password);
            let resp = gloo_net::http::Request::post(&self.url("/users/token"))
                .body(form)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            decode::<TokenResponse>(resp).await.map(|t| t.access_token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::offline())
        }
    }

    /// Fetch the caller's past analyses from `GET /analysis/history`.
    pub async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::get(&self.url("/analysis/history")))
                .send()
                .await
                .map_err(transport)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::offline())
        }
    }

    /// Delete the caller's account via `DELETE /users/me`.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = with_auth(gloo_net::http::Request::delete(&self.url("/users/me")))
                .send()
                .await
                .map_err(transport)?;
            ensure_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::offline())
        }
    }

    /// Upload a drawing to the analysis workflow as a multipart form.
    ///
    /// The workflow is an external automation service; its response is
    /// decoded into the loose [`AnalysisResult`] record without further
    /// validation.
    #[cfg(feature = "hydrate")]
    pub async fn analyze_drawing(&self, file: &web_sys::File) -> Result<AnalysisResult, ApiError> {
        let form =
            web_sys::FormData::new().map_err(|_| ApiError(GENERIC_FAILURE.to_owned()))?;
        let _ = form.append_with_blob_and_filename("file", file, &file.name());
        log::debug!("uploading {} to analysis workflow", file.name());
        let resp = gloo_net::http::Request::post(self.workflow_url)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    #[cfg(feature = "hydrate")]
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError(format!("Network error: {err}"))
}

/// Attach the persisted bearer token, when one exists.
#[cfg(feature = "hydrate")]
fn with_auth(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::token() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Decode a JSON success body, or shape a non-2xx response into [`ApiError`].
#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError(error_message(&body)));
    }
    resp.json::<T>().await.map_err(transport)
}

/// Like [`decode`], for endpoints whose success body the client ignores.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError(error_message(&body)))
    }
}
