use std::str::FromStr;

use cards::CardNumber;
use masking::Secret;
use router::{
    configs::Settings,
    core::payments::{ConnectorData, PaymentGateway},
    types::{Card, ConnectorAuthType, PaymentsResponseData},
};

pub const ACCESS_TOKEN: &str = "test-access-token";
pub const CUSTOMER_ID: &str = "1042";

/// A gateway wired to a mock server instead of the live endpoint.
pub fn gateway_for(base_url: &str) -> PaymentGateway {
    let mut settings = Settings::default();
    settings.connectors.recebee.base_url = base_url.to_string();
    gateway_with_settings(settings)
}

pub fn gateway_with_settings(settings: Settings) -> PaymentGateway {
    PaymentGateway::new(
        settings,
        ConnectorData::get_connector_by_name("recebee").unwrap(),
        "merchant_test",
        ConnectorAuthType::BodyKey {
            api_key: Secret::new(ACCESS_TOKEN.to_string()),
            key1: Secret::new(CUSTOMER_ID.to_string()),
        },
    )
}

pub fn test_card() -> Card {
    Card {
        card_number: CardNumber::from_str("4111111111111111").unwrap(),
        card_exp_month: Secret::new("09".to_string()),
        card_exp_year: Secret::new("2027".to_string()),
        card_holder_name: Some(Secret::new("John Doe".to_string())),
        card_cvc: Secret::new("123".to_string()),
        card_network: None,
    }
}

pub fn get_connector_transaction_id(
    response: Result<PaymentsResponseData, router::types::ErrorResponse>,
) -> Option<String> {
    match response {
        Ok(PaymentsResponseData::TransactionResponse { resource_id, .. }) => {
            resource_id.get_connector_transaction_id().ok()
        }
        Err(_) => None,
    }
}
