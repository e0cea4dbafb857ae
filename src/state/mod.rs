//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `theme`, `upload`, `history`) so
//! individual components can depend on small focused models. Each store is
//! an explicit service constructed in `app.rs` and handed to consumers via
//! context; the underlying state structs are plain data so the transition
//! logic stays testable on the host.

pub mod history;
pub mod session;
pub mod theme;
pub mod upload;
