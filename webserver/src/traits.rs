//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use shared::LeadRecord;

use crate::error::WebServerResult;

/// Durable lead log service trait
///
/// Appends are best-effort from the caller's perspective and not
/// idempotent: re-submitting the same logical entry appends a duplicate.
#[mockall::automock]
#[async_trait]
pub trait LeadRecorder: Send + Sync {
    /// Durably append one record to the lead log
    ///
    /// Ordering among concurrent submissions is append-order as observed
    /// by the recorder, not submission-time order.
    async fn record(&self, entry: LeadRecord) -> WebServerResult<()>;
}
