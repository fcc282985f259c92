//! Card data types with validation and masking built in.

mod validate;

pub use validate::{CCValError, CardNumber, CardNumberStrategy};

use common_utils::{date_time, errors};
use error_stack::report;
use masking::{PeekInterface, StrongSecret};
use time::{util::days_in_year_month, Date, Duration, Month, PrimitiveDateTime, Time};

/// Card verification code, three or four digits.
pub struct CardSecurityCode(StrongSecret<u16>);

impl CardSecurityCode {
    pub fn new(secret: StrongSecret<u16>) -> errors::CustomResult<Self, errors::ValidationError> {
        let csc = secret.peek();

        if (100..10000).contains(csc) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card security code".to_string()
            }))
        }
    }
}

pub struct CardExpirationMonth(StrongSecret<u8>);

impl CardExpirationMonth {
    pub fn new(secret: StrongSecret<u8>) -> errors::CustomResult<Self, errors::ValidationError> {
        let month = secret.peek();

        if (1..=12).contains(month) {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration month".to_string()
            }))
        }
    }

    /// The month, zero padded to two digits.
    pub fn two_digits(&self) -> String {
        format!("{:02}", self.0.peek())
    }
}

pub struct CardExpirationYear(StrongSecret<u16>);

impl CardExpirationYear {
    pub fn new(secret: StrongSecret<u16>) -> errors::CustomResult<Self, errors::ValidationError> {
        let year = secret.peek();

        if *year >= 1997 {
            Ok(Self(secret))
        } else {
            Err(report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration year".to_string()
            }))
        }
    }

    pub fn four_digits(&self) -> String {
        self.0.peek().to_string()
    }

    pub fn two_digits(&self) -> String {
        let mut year = self.four_digits();
        year.drain(..year.len().saturating_sub(2));
        year
    }
}

pub struct CardExpiration {
    pub month: CardExpirationMonth,
    pub year: CardExpirationYear,
}

impl CardExpiration {
    pub fn new(
        secret_month: StrongSecret<u8>,
        secret_year: StrongSecret<u16>,
    ) -> errors::CustomResult<Self, errors::ValidationError> {
        let month = CardExpirationMonth::new(secret_month)?;
        let year = CardExpirationYear::new(secret_year)?;
        Ok(Self { month, year })
    }

    /// Whether the expiry lies in the past. The expiry day is the last day of
    /// the expiration month; a day of slack absorbs the offset between the
    /// card holder's timezone and UTC.
    pub fn is_expired(&self) -> errors::CustomResult<bool, errors::ValidationError> {
        let current_datetime_utc = date_time::now();

        let year = i32::from(*self.year.peek().peek());
        let month = Month::try_from(*self.month.peek().peek()).map_err(|_| {
            report!(errors::ValidationError::InvalidValue {
                message: "invalid card expiration month".to_string()
            })
        })?;

        let expiration_day = days_in_year_month(year, month);
        let expiration_date =
            Date::from_calendar_date(year, month, expiration_day).map_err(|_| {
                report!(errors::ValidationError::InvalidValue {
                    message: "invalid card expiration date".to_string()
                })
            })?;

        let expiration_datetime_utc = PrimitiveDateTime::new(expiration_date, Time::MIDNIGHT)
            .saturating_add(Duration::days(1));

        Ok(current_datetime_utc > expiration_datetime_utc)
    }

    pub fn get_month(&self) -> &CardExpirationMonth {
        &self.month
    }

    pub fn get_year(&self) -> &CardExpirationYear {
        &self.year
    }
}

impl PeekInterface<StrongSecret<u16>> for CardSecurityCode {
    fn peek(&self) -> &StrongSecret<u16> {
        &self.0
    }
}

impl PeekInterface<StrongSecret<u8>> for CardExpirationMonth {
    fn peek(&self) -> &StrongSecret<u8> {
        &self.0
    }
}

impl PeekInterface<StrongSecret<u16>> for CardExpirationYear {
    fn peek(&self) -> &StrongSecret<u16> {
        &self.0
    }
}
