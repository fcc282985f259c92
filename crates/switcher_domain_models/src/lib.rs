//! Domain models shared between the switch core and its connectors.

pub mod connector_endpoints;
pub mod payment_method_data;
pub mod router_data;
pub mod router_flow_types;
pub mod router_request_types;
pub mod router_response_types;
pub mod types;
