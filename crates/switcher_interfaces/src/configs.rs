//! Configuration surfaced to connector integrations.

pub use switcher_domain_models::connector_endpoints::{ConnectorParams, Connectors};
