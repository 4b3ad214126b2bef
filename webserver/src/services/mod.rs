//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod lead_recorder;

// Re-export service implementations
pub use lead_recorder::JsonlLeadRecorder;
