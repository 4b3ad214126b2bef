//! Core business logic
//!
//! Pure computation with no I/O, shared by the HTTP handlers

pub mod estimator;

pub use estimator::EstimatorEngine;
