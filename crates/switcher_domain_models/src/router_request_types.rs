use common_enums::{CaptureMethod, Currency};
use common_utils::{
    errors::{CustomResult, ValidationError},
    types::MinorUnit,
};
use error_stack::report;
use masking::Secret;

use crate::payment_method_data::PaymentMethodData;

#[derive(Debug, Clone)]
pub struct PaymentsAuthorizeData {
    pub payment_method_data: PaymentMethodData,
    pub minor_amount: MinorUnit,
    pub currency: Currency,
    pub confirm: bool,
    pub capture_method: Option<CaptureMethod>,
    pub statement_descriptor: Option<String>,
    pub customer_id: Option<String>,
    pub email: Option<Secret<String>>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub minor_amount_to_capture: MinorUnit,
    pub currency: Currency,
    pub connector_transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct PaymentsCancelData {
    pub connector_transaction_id: String,
    pub cancellation_reason: Option<String>,
    pub minor_amount: Option<MinorUnit>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub refund_id: String,
    pub connector_transaction_id: String,
    pub minor_refund_amount: MinorUnit,
    pub currency: Currency,
    pub reason: Option<String>,
}

/// Identifier assigned by the connector for a transaction, referenced by
/// later capture/refund/void calls.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub enum ResponseId {
    ConnectorTransactionId(String),
    EncodedData(String),
    #[default]
    NoResponseId,
}

impl ResponseId {
    pub fn get_connector_transaction_id(&self) -> CustomResult<String, ValidationError> {
        match self {
            Self::ConnectorTransactionId(txn_id) => Ok(txn_id.to_string()),
            _ => Err(report!(ValidationError::IncorrectValueProvided {
                field_name: "connector_transaction_id"
            })),
        }
    }
}
