//! Structured log events for connector API calls.

use masking::masked_serialize;
use serde::Serialize;
use time::PrimitiveDateTime;

/// One connector API call, with masked request/response bodies, collected
/// while the call is processed and emitted once at the end.
#[derive(Debug)]
pub struct ConnectorEvent {
    connector_name: String,
    flow: String,
    url: String,
    request: Option<serde_json::Value>,
    response: Option<serde_json::Value>,
    error: Option<serde_json::Value>,
    status_code: Option<u16>,
    created_at: PrimitiveDateTime,
}

impl ConnectorEvent {
    /// Start collecting an event for one connector call.
    pub fn new(connector_name: &str, flow: &str, url: &str) -> Self {
        Self {
            connector_name: connector_name.to_string(),
            flow: flow.to_string(),
            url: url.to_string(),
            request: None,
            response: None,
            error: None,
            status_code: None,
            created_at: common_utils::date_time::now(),
        }
    }

    /// Attach the (masked) request body.
    pub fn set_request_body<T: Serialize>(&mut self, body: &T) {
        match masked_serialize(body) {
            Ok(value) => self.request = Some(value),
            Err(error) => {
                tracing::warn!(?error, "failed to mask connector request body for logging")
            }
        }
    }

    /// Attach the (masked) response body.
    pub fn set_response_body<T: Serialize>(&mut self, body: &T) {
        match masked_serialize(body) {
            Ok(value) => self.response = Some(value),
            Err(error) => {
                tracing::warn!(?error, "failed to mask connector response body for logging")
            }
        }
    }

    /// Attach error details.
    pub fn set_error(&mut self, error: serde_json::Value) {
        self.error = Some(error);
    }

    /// Attach the HTTP status code of the response.
    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = Some(status_code);
    }

    /// Emit the event through tracing.
    pub fn emit(&self) {
        tracing::info!(
            connector = %self.connector_name,
            flow = %self.flow,
            url = %self.url,
            status_code = ?self.status_code,
            request = ?self.request,
            response = ?self.response,
            error = ?self.error,
            "connector api call"
        );
    }
}
