//! The payment operations facade: the host application's entry point for
//! purchase / authorize / capture / refund / void / verify against a
//! configured connector.
//!
//! Every operation resolves to a single `RouterData` outcome. Failures to
//! build or send the request, processor declines and unparseable responses
//! all end up in `RouterData::response` as an `ErrorResponse`; nothing
//! escapes as a panic or a bare transport error.

use std::{fmt::Debug, marker::PhantomData};

use common_enums::{AttemptStatus, CaptureMethod, Currency, PaymentMethod};
use common_utils::{pii::SecretSerdeValue, types::MinorUnit};
use masking::Secret;
use switcher_connectors::Recebee;
use switcher_domain_models::{
    payment_method_data::{Card, PaymentMethodData},
    router_data::{ConnectorAuthType, ErrorResponse, RouterData},
    router_request_types::{
        PaymentsAuthorizeData, PaymentsCancelData, PaymentsCaptureData, RefundsData,
    },
    router_response_types::PaymentsResponseData,
    types::{
        PaymentsAuthorizeRouterData, PaymentsCancelRouterData, PaymentsCaptureRouterData,
        RefundExecuteRouterData,
    },
};
use switcher_interfaces::{
    api::{BoxedConnector, BoxedConnectorIntegration, Connector, ConnectorIntegrationAny},
    consts::NO_ERROR_CODE,
    errors::ConnectorError,
};

use crate::{
    configs::Settings,
    consts,
    core::errors::CustomResult,
    services::{api, scrub},
};

/// A connector resolved by name, ready to hand out per-flow integrations.
pub struct ConnectorData {
    pub connector: BoxedConnector,
    pub connector_name: String,
}

impl ConnectorData {
    pub fn get_connector_by_name(name: &str) -> CustomResult<Self, ConnectorError> {
        match name {
            "recebee" => Ok(Self {
                connector: Box::new(Recebee::new()),
                connector_name: name.to_string(),
            }),
            _ => Err(ConnectorError::NotImplemented(format!("connector {name}")).into()),
        }
    }
}

/// Options common to every operation.
#[derive(Clone, Debug, Default)]
pub struct PaymentOptions {
    /// Transaction currency; the gateway's default currency when absent.
    pub currency: Option<Currency>,
    pub customer_id: Option<String>,
    pub email: Option<Secret<String>>,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// One merchant's view of one connector: fixed credentials and endpoints,
/// no state shared between calls beyond that.
pub struct PaymentGateway {
    settings: Settings,
    connector: ConnectorData,
    merchant_id: String,
    auth: ConnectorAuthType,
    connector_meta_data: Option<SecretSerdeValue>,
    default_currency: Currency,
}

impl PaymentGateway {
    pub fn new(
        settings: Settings,
        connector: ConnectorData,
        merchant_id: impl Into<String>,
        auth: ConnectorAuthType,
    ) -> Self {
        Self {
            settings,
            connector,
            merchant_id: merchant_id.into(),
            auth,
            connector_meta_data: None,
            default_currency: Currency::BRL,
        }
    }

    /// Attach connector-level options (e.g. wire encoding selection) carried
    /// on every request's `connector_meta_data`.
    pub fn with_connector_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.connector_meta_data = Some(Secret::new(metadata));
        self
    }

    /// Authorize and capture in one round trip.
    pub async fn purchase(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> PaymentsAuthorizeRouterData {
        self.authorize_with_capture(amount, card, options, CaptureMethod::Automatic)
            .await
    }

    /// Hold the amount on the card; a later `capture` settles it.
    pub async fn authorize(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
    ) -> PaymentsAuthorizeRouterData {
        self.authorize_with_capture(amount, card, options, CaptureMethod::Manual)
            .await
    }

    /// Settle a previously authorized transaction.
    pub async fn capture(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> PaymentsCaptureRouterData {
        let request = PaymentsCaptureData {
            minor_amount_to_capture: amount,
            currency: options.currency.unwrap_or(self.default_currency),
            connector_transaction_id: authorization.to_string(),
        };
        let router_data = self.construct_router_data(request, &options);
        self.call(router_data).await
    }

    /// Return funds for a settled transaction.
    pub async fn refund(
        &self,
        amount: MinorUnit,
        authorization: &str,
        options: PaymentOptions,
    ) -> RefundExecuteRouterData {
        let request = RefundsData {
            refund_id: uuid::Uuid::new_v4().to_string(),
            connector_transaction_id: authorization.to_string(),
            minor_refund_amount: amount,
            currency: options.currency.unwrap_or(self.default_currency),
            reason: options.description.clone(),
        };
        let router_data = self.construct_router_data(request, &options);
        self.call(router_data).await
    }

    /// Cancel a previously authorized, not yet captured transaction.
    pub async fn void(
        &self,
        authorization: &str,
        options: PaymentOptions,
    ) -> PaymentsCancelRouterData {
        let request = PaymentsCancelData {
            connector_transaction_id: authorization.to_string(),
            cancellation_reason: options.description.clone(),
            minor_amount: None,
            currency: options.currency,
        };
        let router_data = self.construct_router_data(request, &options);
        self.call(router_data).await
    }

    /// Validate a card by authorizing a small amount and voiding the hold
    /// straight away. The void is attempted only when the authorization
    /// yielded a transaction id, and its outcome never overrides the
    /// reported result: verify returns the authorization outcome.
    pub async fn verify(
        &self,
        card: Card,
        options: PaymentOptions,
    ) -> PaymentsAuthorizeRouterData {
        let authorization = self
            .authorize(
                MinorUnit::new(consts::VERIFY_AMOUNT),
                card,
                options.clone(),
            )
            .await;

        if let Ok(PaymentsResponseData::TransactionResponse { resource_id, .. }) =
            &authorization.response
        {
            if let Ok(transaction_id) = resource_id.get_connector_transaction_id() {
                let void_outcome = self.void(&transaction_id, options).await;
                tracing::debug!(void_status=?void_outcome.status, "verification void completed");
            }
        }

        authorization
    }

    /// Redact sensitive material from a wire transcript.
    pub fn scrub(&self, transcript: &str) -> String {
        scrub::scrub(transcript)
    }

    pub fn supports_scrubbing(&self) -> bool {
        true
    }

    async fn authorize_with_capture(
        &self,
        amount: MinorUnit,
        card: Card,
        options: PaymentOptions,
        capture_method: CaptureMethod,
    ) -> PaymentsAuthorizeRouterData {
        let request = PaymentsAuthorizeData {
            payment_method_data: PaymentMethodData::Card(card),
            minor_amount: amount,
            currency: options.currency.unwrap_or(self.default_currency),
            confirm: true,
            capture_method: Some(capture_method),
            statement_descriptor: options.description.clone(),
            customer_id: options.customer_id.clone(),
            email: options.email.clone(),
            metadata: options.metadata.clone(),
        };
        let router_data = self.construct_router_data(request, &options);
        self.call(router_data).await
    }

    async fn call<T, Req, Resp>(
        &self,
        router_data: RouterData<T, Req, Resp>,
    ) -> RouterData<T, Req, Resp>
    where
        T: Clone + Debug + 'static,
        Req: Clone + Debug + 'static,
        Resp: Clone + Debug + 'static,
        dyn Connector + Sync: ConnectorIntegrationAny<T, Req, Resp>,
    {
        let integration: BoxedConnectorIntegration<'_, T, Req, Resp> =
            self.connector.connector.get_connector_integration();
        match api::execute_connector_processing_step(&self.settings, integration, &router_data)
            .await
        {
            Ok(router_data) => router_data,
            Err(error) => fold_into_outcome(router_data, error),
        }
    }

    fn construct_router_data<T, Req, Resp>(
        &self,
        request: Req,
        options: &PaymentOptions,
    ) -> RouterData<T, Req, Resp> {
        let payment_id = uuid::Uuid::new_v4().to_string();
        RouterData {
            flow: PhantomData,
            merchant_id: self.merchant_id.clone(),
            customer_id: options.customer_id.clone(),
            connector: self.connector.connector_name.clone(),
            attempt_id: format!("{payment_id}_1"),
            payment_id,
            status: AttemptStatus::default(),
            payment_method: PaymentMethod::Card,
            connector_auth_type: self.auth.clone(),
            description: options.description.clone(),
            connector_meta_data: self.connector_meta_data.clone(),
            request,
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: uuid::Uuid::new_v4().to_string(),
            test_mode: None,
            connector_http_status_code: None,
        }
    }
}

/// Fold a processing-step failure into the normalized outcome shape, so the
/// caller of an operation never has to handle a bare error report.
fn fold_into_outcome<T, Req, Resp>(
    mut router_data: RouterData<T, Req, Resp>,
    error: error_stack::Report<ConnectorError>,
) -> RouterData<T, Req, Resp> {
    tracing::error!(?error, "connector processing step failed");
    let context = error.current_context();
    router_data.response = Err(ErrorResponse {
        code: NO_ERROR_CODE.to_string(),
        message: context.to_string(),
        reason: Some(context.to_string()),
        status_code: router_data.connector_http_status_code.unwrap_or(500),
        attempt_status: None,
        connector_transaction_id: None,
    });
    router_data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_connector_name_is_rejected() {
        assert!(ConnectorData::get_connector_by_name("recebee").is_ok());
        assert!(ConnectorData::get_connector_by_name("stripe").is_err());
    }

    #[test]
    fn fold_produces_a_structured_outcome() {
        let router_data: PaymentsCancelRouterData = RouterData {
            flow: PhantomData,
            merchant_id: "m".to_string(),
            customer_id: None,
            connector: "recebee".to_string(),
            payment_id: "p".to_string(),
            attempt_id: "p_1".to_string(),
            status: AttemptStatus::default(),
            payment_method: PaymentMethod::Card,
            connector_auth_type: ConnectorAuthType::default(),
            description: None,
            connector_meta_data: None,
            request: PaymentsCancelData {
                connector_transaction_id: "txn".to_string(),
                cancellation_reason: None,
                minor_amount: None,
                currency: None,
            },
            response: Err(ErrorResponse::default()),
            connector_request_reference_id: "r".to_string(),
            test_mode: None,
            connector_http_status_code: None,
        };

        let folded = fold_into_outcome(
            router_data,
            error_stack::report!(ConnectorError::ResponseDeserializationFailed),
        );
        let error = folded.response.unwrap_err();
        assert_eq!(error.status_code, 500);
        assert_eq!(error.message, "Failed to deserialize connector response");
    }
}
