//! # Client Error Log Routes
//!
//! The frontend posts its caught errors here so they show up in the server
//! logs. The report is logged locally and never echoed back; the client
//! only needs to know the log was received.

use axum::{http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

/// A client-side error report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientErrorReport {
    /// What went wrong, as the client saw it.
    pub message: Option<String>,

    /// Client-side stack trace, if available.
    pub stack: Option<String>,

    /// Arbitrary structured context (component, cart contents, etc.).
    #[serde(default)]
    pub context: Option<Value>,
}

/// `POST /api/log/error` - accept a client error report.
///
/// 204 No Content: a successful log receipt has nothing to say back.
pub async fn log_client_error(Json(report): Json<ClientErrorReport>) -> StatusCode {
    let message = report.message.as_deref().unwrap_or("No message provided");

    match (&report.stack, &report.context) {
        (Some(stack), Some(context)) => {
            error!(client_error = message, %stack, %context, "client error report")
        }
        (Some(stack), None) => error!(client_error = message, %stack, "client error report"),
        (None, Some(context)) => error!(client_error = message, %context, "client error report"),
        (None, None) => error!(client_error = message, "client error report"),
    }

    StatusCode::NO_CONTENT
}
