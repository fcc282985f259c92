//! Router level errors.

pub use common_utils::errors::CustomResult;
pub use switcher_interfaces::errors::ConnectorError;

/// Errors from the HTTP client layer, before a connector gets to interpret
/// anything.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
    #[error("URL encoding of request failed")]
    UrlEncodingFailed,
    #[error("Failed to send request to connector {0}")]
    RequestNotSent(String),
    #[error("Failed to decode response")]
    ResponseDecodingFailed,
    #[error("Request timed out")]
    RequestTimeoutReceived,
    #[error("Unexpected response from server")]
    UnexpectedServerResponse,
}

impl ApiClientError {
    pub fn is_upstream_timeout(&self) -> bool {
        matches!(self, Self::RequestTimeoutReceived)
    }
}
