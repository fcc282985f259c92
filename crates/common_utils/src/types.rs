//! Amount units and conversion framework shared by connectors.

use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use common_enums::Currency;
use error_stack::ResultExt;

use crate::errors::{CustomResult, ParsingError};

/// The unit in which the core amount framework works: the smallest unit of
/// the transaction currency (cents for BRL/USD).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    /// Forms a new minor unit from an amount.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// The amount as a bare i64.
    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl Display for MinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for MinorUnit {
    type Output = Self;

    fn add(self, a2: Self) -> Self {
        Self(self.0 + a2.0)
    }
}

impl Sub for MinorUnit {
    type Output = Self;

    fn sub(self, a2: Self) -> Self {
        Self(self.0 - a2.0)
    }
}

/// A minor-unit amount rendered as a string, for connectors which take
/// stringified integer amounts on the wire.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    fn new(value: String) -> Self {
        Self(value)
    }
}

/// Conversion between the core `MinorUnit` and whatever representation a
/// connector accepts on the wire.
pub trait AmountConvertor: Send + Sync {
    /// The connector-facing amount representation.
    type Output;

    /// Convert from the core amount to the connector representation.
    fn convert(
        &self,
        amount: MinorUnit,
        currency: Currency,
    ) -> CustomResult<Self::Output, ParsingError>;

    /// Convert a connector amount back into the core representation.
    fn convert_back(
        &self,
        amount: Self::Output,
        currency: Currency,
    ) -> CustomResult<MinorUnit, ParsingError>;
}

/// Identity convertor for connectors which accept integer minor units.
#[derive(Clone, Copy, Debug)]
pub struct MinorUnitForConnector;

impl AmountConvertor for MinorUnitForConnector {
    type Output = MinorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        _currency: Currency,
    ) -> CustomResult<Self::Output, ParsingError> {
        Ok(amount)
    }

    fn convert_back(
        &self,
        amount: Self::Output,
        _currency: Currency,
    ) -> CustomResult<MinorUnit, ParsingError> {
        Ok(amount)
    }
}

/// Convertor for connectors which accept stringified minor units.
#[derive(Clone, Copy, Debug)]
pub struct StringMinorUnitForConnector;

impl AmountConvertor for StringMinorUnitForConnector {
    type Output = StringMinorUnit;

    fn convert(
        &self,
        amount: MinorUnit,
        _currency: Currency,
    ) -> CustomResult<Self::Output, ParsingError> {
        Ok(StringMinorUnit::new(amount.get_amount_as_i64().to_string()))
    }

    fn convert_back(
        &self,
        amount: Self::Output,
        _currency: Currency,
    ) -> CustomResult<MinorUnit, ParsingError> {
        let value = amount
            .0
            .parse::<i64>()
            .change_context(ParsingError::StructParseFailure("StringMinorUnit"))?;
        Ok(MinorUnit::new(value))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn minor_unit_arithmetic() {
        let total = MinorUnit::new(100) + MinorUnit::new(50) - MinorUnit::new(25);
        assert_eq!(total.get_amount_as_i64(), 125);
    }

    #[test]
    fn string_minor_unit_round_trip() {
        let convertor = StringMinorUnitForConnector;
        let wire = convertor
            .convert(MinorUnit::new(1050), Currency::BRL)
            .unwrap();
        assert_eq!(wire, StringMinorUnit("1050".to_string()));
        let back = convertor.convert_back(wire, Currency::BRL).unwrap();
        assert_eq!(back, MinorUnit::new(1050));
    }
}
