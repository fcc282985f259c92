//! Payment connector implementations for the switch.

pub mod connectors;
pub mod constants;
pub mod types;
pub mod utils;

pub use connectors::Recebee;
