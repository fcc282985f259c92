//! Transcript scrubbing.
//!
//! Wire transcripts of connector calls contain card numbers, verification
//! codes and bearer tokens. Anything that logs or stores a transcript runs it
//! through [`scrub`] first.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

const FILTERED: &str = "[FILTERED]";

static BEARER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(authorization:\s*bearer\s+)[A-Za-z0-9._~+/=-]+")
        .expect("bearer token pattern")
});

static CARD_NUMBER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(card_number[\]"'\\]*\s*[:=]\s*["'\\]*)[0-9 ]{12,23}"#)
        .expect("card number field pattern")
});

static CVV_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)((?:card_cvv|security_code|cvv)[\]"'\\]*\s*[:=]\s*["'\\]*)[0-9]{3,4}"#)
        .expect("cvv field pattern")
});

static PAN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{13,19}\b").expect("pan run pattern"));

/// Redact card numbers, verification codes and bearer tokens from a wire
/// transcript. The transcript structure is preserved so it stays useful for
/// debugging.
pub fn scrub(transcript: &str) -> String {
    let scrubbed = BEARER_TOKEN.replace_all(transcript, format!("${{1}}{FILTERED}").as_str());
    let scrubbed = CARD_NUMBER_FIELD.replace_all(&scrubbed, format!("${{1}}{FILTERED}").as_str());
    let scrubbed = CVV_FIELD.replace_all(&scrubbed, format!("${{1}}{FILTERED}").as_str());
    // catch PANs appearing outside a recognized field
    PAN_RUN.replace_all(&scrubbed, FILTERED).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrubs_card_numbers_and_cvv_in_json_bodies() {
        let transcript = r#"{"source":{"card":{"card_number":"4111111111111111","card_cvv":"123"}}}"#;
        let scrubbed = scrub(transcript);
        assert!(!scrubbed.contains("4111111111111111"));
        assert!(!scrubbed.contains(r#""card_cvv":"123""#));
        assert!(scrubbed.contains("card_number"));
    }

    #[test]
    fn scrubs_bearer_tokens() {
        let transcript = "POST /v1/customers/7/transactions\nAuthorization: Bearer sk_live_abc123\n";
        let scrubbed = scrub(transcript);
        assert!(!scrubbed.contains("sk_live_abc123"));
        assert!(scrubbed.contains("Authorization: Bearer [FILTERED]"));
    }

    #[test]
    fn scrubs_form_encoded_card_fields() {
        let transcript = "source[card][card_number]=4111111111111111&source[card][card_cvv]=999";
        let scrubbed = scrub(transcript);
        assert!(!scrubbed.contains("4111111111111111"));
        assert!(!scrubbed.contains("999"));
    }

    #[test]
    fn scrubs_bare_pans() {
        let scrubbed = scrub("seen pan 5417319070834825 in the logs");
        assert!(!scrubbed.contains("5417319070834825"));
        assert!(scrubbed.contains(FILTERED));
    }

    #[test]
    fn leaves_ordinary_text_alone() {
        let transcript = "status=succeeded&amount=1050";
        assert_eq!(scrub(transcript), transcript);
    }
}
