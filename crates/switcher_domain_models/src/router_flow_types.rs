//! Marker types for the flows a connector can implement. They carry no data;
//! they select the `ConnectorIntegration` impl and its request/response types.

pub mod payments {
    #[derive(Debug, Clone)]
    pub struct Authorize;

    #[derive(Debug, Clone)]
    pub struct Capture;

    #[derive(Debug, Clone)]
    pub struct Void;
}

pub mod refunds {
    #[derive(Debug, Clone)]
    pub struct Execute;
}

pub use payments::{Authorize, Capture, Void};
pub use refunds::Execute;
