//! # engidraw-client
//!
//! Leptos + WASM single-page client for EngiDraw Data: upload an
//! engineering drawing, hand it to an external analysis workflow for BOM
//! extraction and weight calculation, and browse past scans.
//!
//! The client performs no OCR and no calculation itself; it talks to the
//! backend REST API and the workflow endpoint and renders whatever
//! structured JSON comes back.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
