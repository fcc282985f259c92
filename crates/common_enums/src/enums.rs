use serde::{Deserialize, Serialize};

/// The status of the payment attempt as tracked by the switch.
///
/// Connectors map their own transaction statuses into this enum when handling
/// responses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    Started,
    Authorizing,
    AuthorizationFailed,
    Authorized,
    CaptureInitiated,
    CaptureFailed,
    Charged,
    VoidInitiated,
    VoidFailed,
    Voided,
    #[default]
    Pending,
    Failure,
}

/// Processing status of a refund.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RefundStatus {
    Failure,
    #[default]
    Pending,
    Success,
}

/// ISO 4217 currency codes accepted by the switch.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Currency {
    AUD,
    BRL,
    CAD,
    CHF,
    EUR,
    GBP,
    INR,
    JPY,
    MXN,
    USD,
}

/// Specifies how the authorized amount is captured.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CaptureMethod {
    /// Capture in the same request that authorizes.
    #[default]
    Automatic,
    /// Hold the funds, capture through a later request.
    Manual,
    /// Capture at a scheduled later point in time.
    Scheduled,
}

/// The broad class of payment instrument.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
    BankTransfer,
    Wallet,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodType {
    Credit,
    Debit,
}

/// Whether a connector feature is available.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStatus {
    NotSupported,
    Supported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_status_serializes_snake_case() {
        let status = serde_json::to_string(&AttemptStatus::AuthorizationFailed).unwrap();
        assert_eq!(status, r#""authorization_failed""#);
    }

    #[test]
    fn currency_display_is_uppercase() {
        assert_eq!(Currency::BRL.to_string(), "BRL");
    }
}
