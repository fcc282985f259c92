//! Dispatch, configuration and the payment operations facade of the switch.

pub mod configs;
pub mod consts;
pub mod core;
pub mod services;
pub mod types;
