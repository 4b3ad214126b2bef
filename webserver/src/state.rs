//! Webserver state management
//!
//! Counters and flags shared across HTTP handlers.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub server_start_time: Instant,
    pub leads_recorded: AtomicU64,
    pub is_running: AtomicBool,
}

impl WebServerState {
    /// Create a new webserver state
    pub fn new() -> Self {
        Self {
            server_start_time: Instant::now(),
            leads_recorded: AtomicU64::new(0),
            is_running: AtomicBool::new(true),
        }
    }

    /// Check if the server is running
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    /// Set running state
    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Count one successfully recorded lead, returning the new total
    pub fn increment_leads_recorded(&self) -> u64 {
        self.leads_recorded.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Get the number of leads recorded since startup
    pub fn get_leads_recorded(&self) -> u64 {
        self.leads_recorded.load(Ordering::Relaxed)
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::new()
    }
}
