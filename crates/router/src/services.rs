pub mod api;
pub mod client;
pub mod scrub;

pub use switcher_interfaces::api::BoxedConnectorIntegration;
