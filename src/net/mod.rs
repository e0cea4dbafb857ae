//! Network layer: wire types and the HTTP client for the backend API and
//! the analysis workflow.

pub mod api;
pub mod types;
