#![allow(clippy::unwrap_used, clippy::panic_in_result_fn)]

use std::str::FromStr;

use cards::{CardExpiration, CardExpirationMonth, CardExpirationYear, CardNumber, CardSecurityCode};
use common_utils::date_time;
use masking::PeekInterface;

#[test]
fn test_card_security_code() {
    // no panic
    let valid_csc = CardSecurityCode::new(1234.into()).unwrap();

    // will panic on unwrap
    let invalid_csc = CardSecurityCode::new(12.into());

    assert_eq!(*valid_csc.peek().peek(), 1234);
    assert!(invalid_csc.is_err());
}

#[test]
fn test_card_expiration_month() {
    let valid_month = CardExpirationMonth::new(3.into()).unwrap();
    let invalid_month = CardExpirationMonth::new(13.into());

    assert_eq!(valid_month.two_digits(), "03");
    assert!(invalid_month.is_err());
}

#[test]
fn test_card_expiration_year() {
    let valid_year = CardExpirationYear::new(2030.into()).unwrap();
    let invalid_year = CardExpirationYear::new(1996.into());

    assert_eq!(valid_year.four_digits(), "2030");
    assert_eq!(valid_year.two_digits(), "30");
    assert!(invalid_year.is_err());
}

#[test]
fn test_card_expiration() {
    let now = date_time::now();

    let expired = CardExpiration::new(1.into(), 2019.into()).unwrap();
    assert!(expired.is_expired().unwrap());

    let future_year = u16::try_from(now.year() + 2).unwrap();
    let valid = CardExpiration::new(12.into(), future_year.into()).unwrap();
    assert!(!valid.is_expired().unwrap());
}

#[test]
fn test_card_number_validation() {
    let number = CardNumber::from_str("4111 1111 1111 1111").unwrap();
    assert_eq!(number.get_card_isin(), "411111");
    assert_eq!(number.get_last4(), "1111");
    assert!(CardNumber::from_str("4111 1111 1111 1112").is_err());
}
