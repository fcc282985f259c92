//! Connector endpoint configuration.

use serde::Deserialize;

/// Base URLs for every connector known to the switch.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Connectors {
    pub recebee: ConnectorParams,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConnectorParams {
    pub base_url: String,
    pub secondary_base_url: Option<String>,
}
