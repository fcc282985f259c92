#![allow(dead_code, clippy::unwrap_used, clippy::panic_in_result_fn)]

use masking::{ExposeInterface, Mask, Maskable, PeekInterface, Secret, StrongSecret};

#[test]
fn basic_secret() {
    #[derive(Clone, Debug, serde::Serialize, PartialEq, Eq)]
    struct Composite {
        secret_number: Secret<i64>,
        not_secret: String,
    }

    let composite = Composite {
        secret_number: Secret::new(1029),
        not_secret: "not secret".to_string(),
    };

    // debug is masked
    let got = format!("{composite:?}");
    assert!(!got.contains("1029"));
    assert!(got.contains("not secret"));

    // serialization exposes the raw value
    let json = serde_json::to_string(&composite).unwrap();
    assert!(json.contains("1029"));

    // peek and expose
    assert_eq!(composite.secret_number.peek(), &1029);
    assert_eq!(composite.secret_number.clone().expose(), 1029);
}

#[test]
fn masked_serialize_hides_secrets() {
    #[derive(Debug, serde::Serialize)]
    struct Payload {
        card_holder: Secret<String>,
        amount: i64,
        tags: Vec<String>,
    }

    let payload = Payload {
        card_holder: Secret::new("John Doe".to_string()),
        amount: 100,
        tags: vec!["a".to_string()],
    };

    let masked = masking::masked_serialize(&payload).unwrap();
    let text = masked.to_string();
    assert!(!text.contains("John Doe"));
    assert_eq!(masked["amount"], serde_json::json!(100));
    assert_eq!(masked["tags"], serde_json::json!(["a"]));
}

#[test]
fn strong_secret_eq_and_debug() {
    let lhs: StrongSecret<String> = StrongSecret::new("top secret".to_string());
    let rhs: StrongSecret<String> = StrongSecret::new("top secret".to_string());
    assert_eq!(lhs, rhs);
    assert_eq!("*** alloc::string::String ***", format!("{lhs:?}"));
}

#[test]
fn maskable_headers() {
    let masked: Maskable<String> = "api-key-value".to_string().into_masked();
    let normal: Maskable<String> = "application/json".into();

    assert!(masked.is_masked());
    assert!(!normal.is_masked());
    assert!(!format!("{masked:?}").contains("api-key-value"));
    assert_eq!(masked.into_inner(), "api-key-value");
}

#[test]
fn secret_deserialize_roundtrip() {
    let secret: Secret<String> = serde_json::from_str(r#""hunter2""#).unwrap();
    assert_eq!(secret.peek(), "hunter2");
}
