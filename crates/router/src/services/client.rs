//! Construction of the HTTP client used for connector calls.

use std::time::Duration;

use error_stack::ResultExt;
use switcher_interfaces::{consts, types::Proxy};

use crate::core::errors::{ApiClientError, CustomResult};

/// Build a reqwest client honoring the proxy configuration. The connection
/// lifecycle (TLS, pooling) is the client's concern, not the connectors'.
pub fn create_client(proxy_config: &Proxy) -> CustomResult<reqwest::Client, ApiClientError> {
    let mut client_builder = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(consts::USER_AGENT);

    if let Some(url) = proxy_config.http_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::http(url).change_context(ApiClientError::ClientConstructionFailed)?,
        );
    }

    if let Some(url) = proxy_config.https_url.as_ref() {
        client_builder = client_builder.proxy(
            reqwest::Proxy::https(url).change_context(ApiClientError::ClientConstructionFailed)?,
        );
    }

    if let Some(idle_pool_connection_timeout) = proxy_config.idle_pool_connection_timeout {
        client_builder = client_builder
            .pool_idle_timeout(Duration::from_secs(idle_pool_connection_timeout));
    }

    client_builder
        .build()
        .change_context(ApiClientError::ClientConstructionFailed)
        .attach_printable("Failed to construct base HTTP client")
}
