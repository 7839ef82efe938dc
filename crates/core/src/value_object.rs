//! Value objects: equality by value, not identity.
//!
//! `Price` and `Quantity` carry the input rules every ledger command shares,
//! so a command holding one of them has already been validated.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A unit price in the shop currency (euros).
///
/// Stored prices may be zero (seeded or imported data); prices entered for a
/// new product must be strictly positive, see [`Price::positive`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Accept a price entered for a new product: finite and greater than zero.
    pub fn positive(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinitePrice { field });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositivePrice { field });
        }
        Ok(Self(value))
    }

    /// Wrap a stored price without validation.
    pub const fn from_stored(value: f64) -> Self {
        Self(value)
    }

    /// Check a stored price: finite and not below zero.
    pub fn check_stored(self, field: &'static str) -> Result<Self, ValidationError> {
        if !self.0.is_finite() {
            return Err(ValidationError::NonFinitePrice { field });
        }
        if self.0 < 0.0 {
            return Err(ValidationError::NegativePrice { field });
        }
        Ok(self)
    }

    pub const fn amount(self) -> f64 {
        self.0
    }

    /// `self × quantity`.
    pub fn times(self, quantity: u64) -> f64 {
        self.0 * quantity as f64
    }
}

/// A strictly positive number of units moved by a single command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Quantity(u64);

impl Quantity {
    /// Validate a raw quantity: zero and negatives are both rejected, with
    /// different reasons.
    pub fn new(raw: i64) -> Result<Self, ValidationError> {
        match raw {
            0 => Err(ValidationError::ZeroQuantity),
            n if n < 0 => Err(ValidationError::NegativeQuantity(n)),
            n => Ok(Self(n.unsigned_abs())),
        }
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(Quantity::new(0), Err(ValidationError::ZeroQuantity));
    }

    #[test]
    fn negative_quantity_keeps_the_value() {
        assert_eq!(Quantity::new(-3), Err(ValidationError::NegativeQuantity(-3)));
    }

    #[test]
    fn price_must_be_positive_and_finite() {
        assert_eq!(
            Price::positive("sellingPrice", 0.0),
            Err(ValidationError::NonPositivePrice { field: "sellingPrice" })
        );
        assert_eq!(
            Price::positive("sellingPrice", -1.0),
            Err(ValidationError::NonPositivePrice { field: "sellingPrice" })
        );
        assert_eq!(
            Price::positive("purchasingPrice", f64::NAN),
            Err(ValidationError::NonFinitePrice { field: "purchasingPrice" })
        );
        assert_eq!(Price::positive("sellingPrice", 1.5).unwrap().amount(), 1.5);
    }

    #[test]
    fn stored_prices_may_be_zero_but_not_negative() {
        assert_eq!(Price::ZERO.check_stored("sellingPrice"), Ok(Price::ZERO));
        assert_eq!(
            Price::from_stored(-0.5).check_stored("sellingPrice"),
            Err(ValidationError::NegativePrice { field: "sellingPrice" })
        );
    }

    #[test]
    fn quantity_deserialization_applies_the_same_rules() {
        let ok: Quantity = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-2").is_err());
    }

    proptest! {
        #[test]
        fn positive_quantities_round_trip(n in 1i64..i64::MAX) {
            let q = Quantity::new(n).unwrap();
            prop_assert_eq!(q.get(), n as u64);
        }

        #[test]
        fn non_positive_quantities_never_validate(n in i64::MIN..=0i64) {
            prop_assert!(Quantity::new(n).is_err());
        }
    }
}
