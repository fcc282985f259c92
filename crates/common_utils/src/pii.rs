//! Personal Identifiable Information wrappers.

use masking::Secret;

/// Alias for secret JSON values such as connector metadata.
pub type SecretSerdeValue = Secret<serde_json::Value>;
