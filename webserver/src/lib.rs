//! Lead-capture webserver for the automation ROI estimator
//!
//! Exposes the pure savings estimation engine over HTTP together with a
//! best-effort lead recording endpoint backed by an append-only log.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::LeadRecorder;

// Re-export service implementations
pub use services::JsonlLeadRecorder;
