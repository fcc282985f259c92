use cards::CardNumber;
use common_enums::enums;
use common_utils::{pii::SecretSerdeValue, types::MinorUnit};
use masking::Secret;
use serde::{Deserialize, Serialize};
use switcher_domain_models::{
    payment_method_data::PaymentMethodData,
    router_data::{ConnectorAuthType, ErrorResponse, RouterData},
    router_flow_types::{Authorize, Capture, Execute, Void},
    router_request_types::{PaymentsAuthorizeData, ResponseId},
    router_response_types::{PaymentsResponseData, RefundsResponseData},
};
use switcher_interfaces::{consts, errors};

use crate::{
    types::{
        PaymentsAuthorizeRouterData, PaymentsCancelRouterData, PaymentsCaptureRouterData,
        RefundsResponseRouterData, RefundsRouterData, ResponseRouterData,
    },
    utils,
};

pub struct RecebeeRouterData<T> {
    pub amount: MinorUnit,
    pub router_data: T,
}

impl<T> From<(MinorUnit, T)> for RecebeeRouterData<T> {
    fn from((amount, item): (MinorUnit, T)) -> Self {
        Self {
            amount,
            router_data: item,
        }
    }
}

// Auth

/// Recebee authenticates with a bearer access token; the customer the
/// merchant transacts under is part of every URL and therefore carried next
/// to the token.
pub struct RecebeeAuthType {
    pub(super) access_token: Secret<String>,
    pub(super) customer_id: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for RecebeeAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                access_token: api_key.to_owned(),
                customer_id: key1.to_owned(),
            }),
            _ => Err(errors::ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// Connector-level options carried on `connector_meta_data`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecebeeConnectorMetadataObject {
    /// Send transaction bodies form-url-encoded instead of as JSON.
    #[serde(default)]
    pub use_form_encoding: bool,
}

impl TryFrom<&Option<SecretSerdeValue>> for RecebeeConnectorMetadataObject {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(meta_data: &Option<SecretSerdeValue>) -> Result<Self, Self::Error> {
        match meta_data {
            Some(metadata) => {
                utils::to_connector_meta_from_secret::<Self>(Some(metadata.clone())).map_err(
                    |_| errors::ConnectorError::InvalidConnectorConfig { config: "metadata" }.into(),
                )
            }
            None => Ok(Self::default()),
        }
    }
}

// Requests

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecebeeSourceUsage {
    SingleUse,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecebeeSourceType {
    Card,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecebeePaymentType {
    Credit,
}

#[derive(Debug, Serialize)]
pub struct RecebeeCard {
    pub card_number: CardNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<Secret<String>>,
    /// `MM/YYYY`
    pub card_expiration_date: Secret<String>,
    pub card_cvv: Secret<String>,
}

#[derive(Debug, Serialize)]
pub struct RecebeeSource {
    pub amount: MinorUnit,
    pub currency: enums::Currency,
    pub usage: RecebeeSourceUsage,
    #[serde(rename = "type")]
    pub source_type: RecebeeSourceType,
    pub card: RecebeeCard,
}

#[derive(Debug, Serialize)]
pub struct RecebeeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
pub struct RecebeeTransactionRequest {
    pub payment_type: RecebeePaymentType,
    pub capture: bool,
    pub source: RecebeeSource,
    pub metadata: RecebeeMetadata,
}

impl TryFrom<&RecebeeRouterData<&PaymentsAuthorizeRouterData>> for RecebeeTransactionRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RecebeeRouterData<&PaymentsAuthorizeRouterData>,
    ) -> Result<Self, Self::Error> {
        let capture = match item.router_data.request.capture_method.unwrap_or_default() {
            enums::CaptureMethod::Automatic => true,
            enums::CaptureMethod::Manual => false,
            enums::CaptureMethod::Scheduled => {
                return Err(errors::ConnectorError::NotImplemented(
                    "scheduled capture".to_string(),
                )
                .into())
            }
        };

        let card = match &item.router_data.request.payment_method_data {
            PaymentMethodData::Card(card) => RecebeeCard {
                card_number: card.card_number.clone(),
                card_holder_name: card.card_holder_name.clone(),
                card_expiration_date: card.get_expiry_date_as_mmyyyy(),
                card_cvv: card.card_cvc.clone(),
            },
        };

        let source = RecebeeSource {
            amount: item.amount,
            currency: item.router_data.request.currency,
            usage: RecebeeSourceUsage::SingleUse,
            source_type: RecebeeSourceType::Card,
            card,
        };

        let metadata = RecebeeMetadata {
            order_id: Some(item.router_data.connector_request_reference_id.clone()),
            description: item.router_data.description.clone(),
            customer: item.router_data.request.customer_id.clone(),
            email: item.router_data.request.email.clone(),
        };

        Ok(Self {
            payment_type: RecebeePaymentType::Credit,
            capture,
            source,
            metadata,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecebeeCaptureRequest {
    pub amount: MinorUnit,
}

impl TryFrom<&RecebeeRouterData<&PaymentsCaptureRouterData>> for RecebeeCaptureRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &RecebeeRouterData<&PaymentsCaptureRouterData>) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: item.amount,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecebeeVoidRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<MinorUnit>,
}

impl TryFrom<&PaymentsCancelRouterData> for RecebeeVoidRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &PaymentsCancelRouterData) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: item.request.minor_amount,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RecebeeRefundRequest {
    pub amount: MinorUnit,
}

impl<F> TryFrom<&RecebeeRouterData<&RefundsRouterData<F>>> for RecebeeRefundRequest {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(item: &RecebeeRouterData<&RefundsRouterData<F>>) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: item.amount,
        })
    }
}

// Responses

/// Transaction status as reported by Recebee. Anything the switch does not
/// recognize, and an absent status field, is treated as a failure.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecebeeTransactionStatus {
    Succeeded,
    Failed,
    Canceled,
    Pending,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecebeeTransactionStatus {
    fn is_succeeded(self) -> bool {
        self == Self::Succeeded
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecebeeTransactionResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub status: RecebeeTransactionStatus,
    pub amount: Option<MinorUnit>,
    pub currency: Option<String>,
    pub payment_type: Option<String>,
}

fn transaction_failure_response(
    response: &RecebeeTransactionResponse,
    attempt_status: enums::AttemptStatus,
    http_code: u16,
) -> ErrorResponse {
    ErrorResponse {
        code: consts::NO_ERROR_CODE.to_string(),
        message: format!("transaction status {:?}", response.status),
        reason: None,
        status_code: http_code,
        attempt_status: Some(attempt_status),
        connector_transaction_id: response.id.clone(),
    }
}

fn transaction_success_response(response: &RecebeeTransactionResponse) -> PaymentsResponseData {
    PaymentsResponseData::TransactionResponse {
        resource_id: response
            .id
            .clone()
            .map(ResponseId::ConnectorTransactionId)
            .unwrap_or(ResponseId::NoResponseId),
        connector_metadata: None,
        network_txn_id: None,
        connector_response_reference_id: response.id.clone(),
    }
}

impl TryFrom<ResponseRouterData<Authorize, RecebeeTransactionResponse, PaymentsAuthorizeData, PaymentsResponseData>>
    for PaymentsAuthorizeRouterData
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<
            Authorize,
            RecebeeTransactionResponse,
            PaymentsAuthorizeData,
            PaymentsResponseData,
        >,
    ) -> Result<Self, Self::Error> {
        let is_auto_capture = item
            .data
            .request
            .capture_method
            .unwrap_or_default()
            == enums::CaptureMethod::Automatic;

        let (status, response) = if item.response.status.is_succeeded() {
            let status = if is_auto_capture {
                enums::AttemptStatus::Charged
            } else {
                enums::AttemptStatus::Authorized
            };
            (status, Ok(transaction_success_response(&item.response)))
        } else {
            let status = enums::AttemptStatus::AuthorizationFailed;
            (
                status,
                Err(transaction_failure_response(
                    &item.response,
                    status,
                    item.http_code,
                )),
            )
        };

        Ok(Self {
            status,
            response,
            ..item.data
        })
    }
}

impl<T>
    TryFrom<ResponseRouterData<Capture, RecebeeTransactionResponse, T, PaymentsResponseData>>
    for RouterData<Capture, T, PaymentsResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<Capture, RecebeeTransactionResponse, T, PaymentsResponseData>,
    ) -> Result<Self, Self::Error> {
        let (status, response) = if item.response.status.is_succeeded() {
            (
                enums::AttemptStatus::Charged,
                Ok(transaction_success_response(&item.response)),
            )
        } else {
            let status = enums::AttemptStatus::CaptureFailed;
            (
                status,
                Err(transaction_failure_response(
                    &item.response,
                    status,
                    item.http_code,
                )),
            )
        };

        Ok(Self {
            status,
            response,
            ..item.data
        })
    }
}

impl<T> TryFrom<ResponseRouterData<Void, RecebeeTransactionResponse, T, PaymentsResponseData>>
    for RouterData<Void, T, PaymentsResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: ResponseRouterData<Void, RecebeeTransactionResponse, T, PaymentsResponseData>,
    ) -> Result<Self, Self::Error> {
        let (status, response) = if item.response.status.is_succeeded()
            || item.response.status == RecebeeTransactionStatus::Canceled
        {
            (
                enums::AttemptStatus::Voided,
                Ok(transaction_success_response(&item.response)),
            )
        } else {
            let status = enums::AttemptStatus::VoidFailed;
            (
                status,
                Err(transaction_failure_response(
                    &item.response,
                    status,
                    item.http_code,
                )),
            )
        };

        Ok(Self {
            status,
            response,
            ..item.data
        })
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecebeeRefundStatus {
    Succeeded,
    Failed,
    #[default]
    #[serde(other)]
    Pending,
}

impl From<RecebeeRefundStatus> for enums::RefundStatus {
    fn from(item: RecebeeRefundStatus) -> Self {
        match item {
            RecebeeRefundStatus::Succeeded => Self::Success,
            RecebeeRefundStatus::Failed => Self::Failure,
            RecebeeRefundStatus::Pending => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecebeeRefundResponse {
    pub id: String,
    #[serde(default)]
    pub status: RecebeeRefundStatus,
}

impl TryFrom<RefundsResponseRouterData<Execute, RecebeeRefundResponse>>
    for RefundsRouterData<Execute>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: RefundsResponseRouterData<Execute, RecebeeRefundResponse>,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            response: Ok(RefundsResponseData {
                connector_refund_id: item.response.id.clone(),
                refund_status: enums::RefundStatus::from(item.response.status),
            }),
            ..item.data
        })
    }
}

// Errors

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecebeeErrorDetails {
    pub category: Option<String>,
    pub message: Option<String>,
    pub status_code: Option<u16>,
}

/// Error body returned by the Recebee API. All fields are optional so a
/// best-effort parse of unexpected error payloads still succeeds; missing
/// detail falls back to the framework's "no code"/"no message" constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecebeeErrorResponse {
    pub error: Option<RecebeeErrorDetails>,
    pub message: Option<String>,
}

impl RecebeeErrorResponse {
    pub fn code(&self) -> String {
        self.error
            .as_ref()
            .and_then(|error| error.category.clone())
            .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string())
    }

    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|error| error.message.clone())
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string())
    }

    pub fn reason(&self) -> Option<String> {
        self.error
            .as_ref()
            .and_then(|error| error.message.clone())
            .or_else(|| self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::str::FromStr;

    use common_enums::Currency;
    use common_utils::ext_traits::Encode;
    use masking::ExposeInterface;
    use switcher_domain_models::payment_method_data::Card;

    use super::*;

    fn card() -> Card {
        Card {
            card_number: CardNumber::from_str("4111111111111111").unwrap(),
            card_exp_month: Secret::new("09".to_string()),
            card_exp_year: Secret::new("2027".to_string()),
            card_holder_name: Some(Secret::new("John Doe".to_string())),
            card_cvc: Secret::new("123".to_string()),
            card_network: None,
        }
    }

    fn authorize_router_data(capture_method: enums::CaptureMethod) -> PaymentsAuthorizeRouterData {
        RouterData {
            flow: std::marker::PhantomData,
            merchant_id: "merchant_1".to_string(),
            customer_id: Some("cus_1".to_string()),
            connector: "recebee".to_string(),
            payment_id: "pay_1".to_string(),
            attempt_id: "pay_1_1".to_string(),
            status: enums::AttemptStatus::default(),
            payment_method: enums::PaymentMethod::Card,
            connector_auth_type: ConnectorAuthType::BodyKey {
                api_key: Secret::new("access-token".to_string()),
                key1: Secret::new("1042".to_string()),
            },
            description: Some("order 42".to_string()),
            connector_meta_data: None,
            request: PaymentsAuthorizeData {
                payment_method_data: PaymentMethodData::Card(card()),
                minor_amount: MinorUnit::new(1050),
                currency: Currency::BRL,
                confirm: true,
                capture_method: Some(capture_method),
                statement_descriptor: None,
                customer_id: Some("cus_1".to_string()),
                email: None,
                metadata: None,
            },
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: "ref_1".to_string(),
            test_mode: Some(true),
            connector_http_status_code: None,
        }
    }

    #[test]
    fn builds_transaction_request_from_card_payment() {
        let router_data = authorize_router_data(enums::CaptureMethod::Manual);
        let connector_router_data =
            RecebeeRouterData::from((MinorUnit::new(1050), &router_data));
        let request = RecebeeTransactionRequest::try_from(&connector_router_data).unwrap();

        assert!(!request.capture);
        let value = request.encode_to_value().unwrap();
        assert_eq!(value["source"]["amount"], 1050);
        assert_eq!(value["source"]["currency"], "BRL");
        assert_eq!(value["source"]["usage"], "single_use");
        assert_eq!(value["source"]["type"], "card");
        assert_eq!(value["source"]["card"]["card_number"], "4111111111111111");
        assert_eq!(value["source"]["card"]["card_expiration_date"], "09/2027");
        assert_eq!(value["metadata"]["order_id"], "ref_1");
        assert_eq!(value["metadata"]["description"], "order 42");
    }

    #[test]
    fn nested_form_encoding_of_transaction_request() {
        let router_data = authorize_router_data(enums::CaptureMethod::Automatic);
        let connector_router_data =
            RecebeeRouterData::from((MinorUnit::new(1050), &router_data));
        let request = RecebeeTransactionRequest::try_from(&connector_router_data).unwrap();

        let encoded = request.url_encode_nested().unwrap();
        assert!(encoded.contains("source[card][card_number]=4111111111111111"));
        assert!(encoded.contains("source[amount]=1050"));
        assert!(encoded.contains("capture=true"));
    }

    #[test]
    fn succeeded_authorize_response_maps_to_charged_for_auto_capture() {
        let response = RecebeeTransactionResponse {
            id: Some("txn_1".to_string()),
            status: RecebeeTransactionStatus::Succeeded,
            amount: Some(MinorUnit::new(1050)),
            currency: Some("BRL".to_string()),
            payment_type: Some("credit".to_string()),
        };
        let data = authorize_router_data(enums::CaptureMethod::Automatic);
        let router_data = PaymentsAuthorizeRouterData::try_from(ResponseRouterData {
            response,
            data,
            http_code: 200,
        })
        .unwrap();

        assert_eq!(router_data.status, enums::AttemptStatus::Charged);
        let PaymentsResponseData::TransactionResponse { resource_id, .. } =
            router_data.response.unwrap();
        assert_eq!(
            resource_id.get_connector_transaction_id().unwrap(),
            "txn_1"
        );
    }

    #[test]
    fn non_succeeded_status_maps_to_failure_without_resource_id() {
        let response = RecebeeTransactionResponse {
            id: Some("txn_2".to_string()),
            status: RecebeeTransactionStatus::Failed,
            amount: None,
            currency: None,
            payment_type: None,
        };
        let data = authorize_router_data(enums::CaptureMethod::Automatic);
        let router_data = PaymentsAuthorizeRouterData::try_from(ResponseRouterData {
            response,
            data,
            http_code: 200,
        })
        .unwrap();

        assert_eq!(router_data.status, enums::AttemptStatus::AuthorizationFailed);
        let error = router_data.response.unwrap_err();
        assert_eq!(error.connector_transaction_id, Some("txn_2".to_string()));
    }

    #[test]
    fn absent_status_field_is_a_failure() {
        let response: RecebeeTransactionResponse =
            serde_json::from_str(r#"{"id": "txn_3"}"#).unwrap();
        assert_eq!(response.status, RecebeeTransactionStatus::Unknown);
        assert!(!response.status.is_succeeded());
    }

    #[test]
    fn unknown_status_value_is_a_failure() {
        let response: RecebeeTransactionResponse =
            serde_json::from_str(r#"{"id": "txn_4", "status": "reviewing"}"#).unwrap();
        assert_eq!(response.status, RecebeeTransactionStatus::Unknown);
    }

    #[test]
    fn auth_type_carries_token_and_customer() {
        let auth = RecebeeAuthType::try_from(&ConnectorAuthType::BodyKey {
            api_key: Secret::new("tok".to_string()),
            key1: Secret::new("77".to_string()),
        })
        .unwrap();
        assert_eq!(auth.access_token.expose(), "tok");
        assert_eq!(auth.customer_id.expose(), "77");

        assert!(RecebeeAuthType::try_from(&ConnectorAuthType::HeaderKey {
            api_key: Secret::new("tok".to_string()),
        })
        .is_err());
    }

    #[test]
    fn error_body_detail_is_preserved() {
        let body = r#"{"error": {"category": "card_declined", "message": "Insufficient funds", "status_code": 402}}"#;
        let error: RecebeeErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(error.code(), "card_declined");
        assert_eq!(error.message(), "Insufficient funds");

        let empty: RecebeeErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.code(), consts::NO_ERROR_CODE);
        assert_eq!(empty.message(), consts::NO_ERROR_MESSAGE);
    }
}
