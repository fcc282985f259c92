//! connector integration related const declarations

/// No error message string const
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// No error code string const
pub const NO_ERROR_CODE: &str = "No error code";

/// User agent for requests sent from the backend server
pub const USER_AGENT: &str = "Switcher-Backend-Server";
