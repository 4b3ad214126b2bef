//! Main webserver implementation
//!
//! This module contains the main WebServer struct that wires the estimator
//! and lead recorder into an Axum router using dependency injection.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::core::EstimatorEngine;
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::LeadRecorder;
use crate::types::LeadSubmission;
use shared::{EstimationInput, INDUSTRIES, PROCESS_CATALOG};

/// Main webserver struct with dependency injection
pub struct WebServer<R>
where
    R: LeadRecorder,
{
    state: Arc<WebServerState>,
    estimator: Arc<EstimatorEngine>,
    lead_recorder: Arc<R>,
}

// Manual Clone so mock recorders without Clone still work behind the Arc
impl<R: LeadRecorder> Clone for WebServer<R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            estimator: self.estimator.clone(),
            lead_recorder: self.lead_recorder.clone(),
        }
    }
}

impl<R> WebServer<R>
where
    R: LeadRecorder + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(estimator: EstimatorEngine, lead_recorder: R) -> Self {
        Self {
            state: Arc::new(WebServerState::new()),
            estimator: Arc::new(estimator),
            lead_recorder: Arc::new(lead_recorder),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // API routes
            .route("/api/leads", post(submit_lead_handler))
            .route("/api/estimate", post(estimate_handler))
            .route("/api/catalog", get(catalog_handler))
            .route("/api/status", get(status_handler))
            // Health check
            .route("/health", get(health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Allow CORS for the calculator frontend
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the webserver
    pub async fn run(&self, bind_address: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e))
            })?;

        info!("🌐 Web server listening on http://{}", bind_address);
        info!("📋 Lead submissions accepted at http://{}/api/leads", bind_address);

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!("Server error: {}", e);
            }
        });

        tokio::select! {
            _ = server_task => {
                info!("HTTP server task completed");
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
                self.state.set_running(false);
            }
        }

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    /// Parse a submission body and append it to the lead log
    ///
    /// The body is parsed manually rather than through an extractor so that
    /// every failure funnels into the same error path.
    async fn process_submission(&self, body: &[u8]) -> WebServerResult<()> {
        let submission: LeadSubmission =
            serde_json::from_slice(body).map_err(|e| WebServerError::InvalidRequest {
                details: e.to_string(),
            })?;

        self.lead_recorder.record(submission.into_record()).await?;

        let total = self.state.increment_leads_recorded();
        info!("✅ Lead recorded ({} total this run)", total);

        Ok(())
    }
}

// HTTP Handlers

/// Accept a lead submission and append it to the lead log
///
/// Responds `{"ok": true}` on success and `{"ok": false}` with status 500
/// on any failure, matching what the calculator frontend expects.
async fn submit_lead_handler<R>(
    State(webserver): State<WebServer<R>>,
    body: Bytes,
) -> (StatusCode, Json<serde_json::Value>)
where
    R: LeadRecorder + 'static,
{
    match webserver.process_submission(&body).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))),
        Err(e) => {
            warn!("Lead submission failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "ok": false })))
        }
    }
}

/// Compute a savings estimate without recording anything
async fn estimate_handler<R>(
    State(webserver): State<WebServer<R>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, StatusCode>
where
    R: LeadRecorder + 'static,
{
    let input: EstimationInput =
        serde_json::from_slice(&body).map_err(|_| StatusCode::BAD_REQUEST)?;

    let result = webserver.estimator.estimate(&input);

    Ok(Json(json!({
        "ok": true,
        "result": result
    })))
}

/// Expose the process catalog and industry list to the frontend
async fn catalog_handler<R>(
    State(_webserver): State<WebServer<R>>,
) -> Json<serde_json::Value>
where
    R: LeadRecorder + 'static,
{
    Json(json!({
        "processes": PROCESS_CATALOG,
        "industries": INDUSTRIES
    }))
}

/// Get server status
async fn status_handler<R>(
    State(webserver): State<WebServer<R>>,
) -> Json<serde_json::Value>
where
    R: LeadRecorder + 'static,
{
    Json(json!({
        "status": "running",
        "uptime_seconds": webserver.state.get_uptime_seconds(),
        "leads_recorded": webserver.state.get_leads_recorded(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Health check endpoint
async fn health_check<R>(
    State(webserver): State<WebServer<R>>,
) -> Json<serde_json::Value>
where
    R: LeadRecorder + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime": webserver.state.get_uptime_seconds()
    }))
}
