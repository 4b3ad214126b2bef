//! WebServer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Lead storage unavailable: {source}")]
    StorageUnavailable {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
