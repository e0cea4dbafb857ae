//! Endpoint configuration for the backend API and the analysis workflow.
//!
//! Both URLs can be overridden at compile time via `ENGIDRAW_API_URL` and
//! `ENGIDRAW_WORKFLOW_URL`; otherwise the development defaults apply.

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_WORKFLOW_URL: &str = "http://localhost:5678/webhook/analyze-bom";

/// Base URLs the client talks to.
#[derive(Clone, Copy, Debug)]
pub struct ApiConfig {
    /// Backend REST API base URL (no trailing slash).
    pub base_url: &'static str,
    /// Analysis workflow endpoint (absolute URL, multipart upload).
    pub workflow_url: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: match option_env!("ENGIDRAW_API_URL") {
                Some(url) => url,
                None => DEFAULT_API_URL,
            },
            workflow_url: match option_env!("ENGIDRAW_WORKFLOW_URL") {
                Some(url) => url,
                None => DEFAULT_WORKFLOW_URL,
            },
        }
    }
}
