use common_enums::{AttemptStatus, RefundStatus};
use common_utils::types::MinorUnit;
use router::core::payments::PaymentOptions;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::utils::{self, get_connector_transaction_id};

fn succeeded_transaction(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": "succeeded",
        "amount": 1050,
        "currency": "BRL",
        "payment_type": "credit"
    })
}

#[tokio::test]
async fn should_make_a_successful_purchase() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions",
            utils::CUSTOMER_ID
        )))
        .and(header(
            "Authorization",
            format!("Bearer {}", utils::ACCESS_TOKEN).as_str(),
        ))
        .and(body_partial_json(json!({
            "payment_type": "credit",
            "capture": true,
            "source": {
                "amount": 1050,
                "currency": "BRL",
                "usage": "single_use",
                "type": "card",
                "card": {
                    "card_number": "4111111111111111",
                    "card_expiration_date": "09/2027"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_1")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    assert_eq!(response.status, AttemptStatus::Charged);
    assert_eq!(
        get_connector_transaction_id(response.response),
        Some("txn_1".to_string())
    );
}

#[tokio::test]
async fn should_authorize_without_capturing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions",
            utils::CUSTOMER_ID
        )))
        .and(body_partial_json(json!({ "capture": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_2")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .authorize(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    assert_eq!(response.status, AttemptStatus::Authorized);
}

#[tokio::test]
async fn non_succeeded_status_is_a_failure_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "txn_3",
            "status": "failed"
        })))
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    assert_eq!(response.status, AttemptStatus::AuthorizationFailed);
    let error = response.response.unwrap_err();
    assert_eq!(error.connector_transaction_id, Some("txn_3".to_string()));
}

#[tokio::test]
async fn declined_payment_preserves_vendor_error_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "error": {
                "category": "card_declined",
                "message": "Insufficient funds",
                "status_code": 402
            }
        })))
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    let error = response.response.unwrap_err();
    assert_eq!(error.status_code, 402);
    assert_eq!(error.code, "card_declined");
    assert_eq!(error.message, "Insufficient funds");
}

#[tokio::test]
async fn unparseable_error_body_still_yields_an_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(402).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    let error = response.response.unwrap_err();
    assert_eq!(error.message, "Failed to deserialize connector response");
}

#[tokio::test]
async fn should_capture_an_authorized_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions/txn_4/capture",
            utils::CUSTOMER_ID
        )))
        .and(body_partial_json(json!({ "amount": 1050 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_4")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .capture(MinorUnit::new(1050), "txn_4", PaymentOptions::default())
        .await;

    assert_eq!(response.status, AttemptStatus::Charged);
}

#[tokio::test]
async fn should_void_an_authorized_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions/txn_5/void",
            utils::CUSTOMER_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_5")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway.void("txn_5", PaymentOptions::default()).await;

    assert_eq!(response.status, AttemptStatus::Voided);
}

#[tokio::test]
async fn should_refund_a_settled_payment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions/txn_6/refund",
            utils::CUSTOMER_ID
        )))
        .and(body_partial_json(json!({ "amount": 500 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ref_1",
            "status": "succeeded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .refund(MinorUnit::new(500), "txn_6", PaymentOptions::default())
        .await;

    let refund = response.response.unwrap();
    assert_eq!(refund.connector_refund_id, "ref_1");
    assert_eq!(refund.refund_status, RefundStatus::Success);
}

#[tokio::test]
async fn verify_authorizes_then_voids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions",
            utils::CUSTOMER_ID
        )))
        .and(body_partial_json(json!({ "capture": false, "source": { "amount": 100 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_7")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions/txn_7/void",
            utils::CUSTOMER_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_7")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .verify(utils::test_card(), PaymentOptions::default())
        .await;

    assert_eq!(response.status, AttemptStatus::Authorized);
    assert_eq!(
        get_connector_transaction_id(response.response),
        Some("txn_7".to_string())
    );
}

#[tokio::test]
async fn verify_reports_the_authorization_even_when_the_void_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions",
            utils::CUSTOMER_ID
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_8")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions/txn_8/void",
            utils::CUSTOMER_ID
        )))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri());
    let response = gateway
        .verify(utils::test_card(), PaymentOptions::default())
        .await;

    assert_eq!(response.status, AttemptStatus::Authorized);
    assert_eq!(
        get_connector_transaction_id(response.response),
        Some("txn_8".to_string())
    );
}

#[tokio::test]
async fn form_encoding_can_be_selected_through_connector_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/v1/customers/{}/transactions",
            utils::CUSTOMER_ID
        )))
        .and(body_string_contains(
            "source[card][card_number]=4111111111111111",
        ))
        .and(body_string_contains("source[amount]=1050"))
        .respond_with(ResponseTemplate::new(200).set_body_json(succeeded_transaction("txn_9")))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = utils::gateway_for(&server.uri())
        .with_connector_metadata(json!({ "use_form_encoding": true }));
    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    assert_eq!(response.status, AttemptStatus::Charged);
}

#[tokio::test]
async fn transcripts_are_scrubbed_before_logging() {
    let server = MockServer::start().await;
    let gateway = utils::gateway_for(&server.uri());
    assert!(gateway.supports_scrubbing());

    let transcript = format!(
        "POST /v1/customers/{}/transactions\nAuthorization: Bearer {}\n{{\"source\":{{\"card\":{{\"card_number\":\"4111111111111111\",\"card_cvv\":\"123\"}}}}}}",
        utils::CUSTOMER_ID,
        utils::ACCESS_TOKEN,
    );
    let scrubbed = gateway.scrub(&transcript);

    assert!(!scrubbed.contains("4111111111111111"));
    assert!(!scrubbed.contains(utils::ACCESS_TOKEN));
    assert!(scrubbed.contains("/v1/customers/1042/transactions"));
}

#[tokio::test]
async fn slow_connector_times_out_into_a_structured_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(succeeded_transaction("txn_10"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut settings = router::configs::Settings::default();
    settings.connectors.recebee.base_url = server.uri();
    settings.request_timeout = 1;
    let gateway = utils::gateway_with_settings(settings);

    let response = gateway
        .purchase(
            MinorUnit::new(1050),
            utils::test_card(),
            PaymentOptions::default(),
        )
        .await;

    let error = response.response.unwrap_err();
    assert_eq!(error.code, "TIMEOUT");
    assert_eq!(error.status_code, 504);
}
