//! Router level constants.

/// Default request timeout for outgoing connector calls, in seconds.
pub const REQUEST_TIME_OUT: u64 = 30;

/// Error code produced when a connector call times out.
pub const REQUEST_TIMEOUT_ERROR_CODE: &str = "TIMEOUT";

/// Error message produced when a connector call times out.
pub const REQUEST_TIMEOUT_ERROR_MESSAGE: &str = "Connector did not respond in specified time";

/// Amount authorized by a card verification, in minor units.
pub const VERIFY_AMOUNT: i64 = 100;
