//! Shared types for the automation ROI estimator
//!
//! Contains the domain data model, the static process catalog, shared
//! error types and tracing setup. Webserver-internal types (wire
//! request shapes) are kept in the webserver crate.

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod types;

pub use catalog::{INDUSTRIES, PROCESS_CATALOG, ProcessCategory};
pub use errors::*;
pub use types::{EstimationInput, EstimationResult, LeadRecord};
