//! Money value object (amount in minor units + ISO currency code).

use serde::{Deserialize, Serialize};

use domainkit_core::{DomainError, DomainResult, ValueObject};

/// Attribute bundle for [`Money`]. Amounts are minor units (cents).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyProps {
    pub amount: i64,
    pub currency: String,
}

/// An amount of money in a single currency.
///
/// Compared structurally: two independently constructed `Money` values with
/// the same amount and currency are equal. Immutable once built; arithmetic
/// returns new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(ValueObject<MoneyProps>);

impl Money {
    /// Build a monetary amount, validating the currency code up front.
    pub fn new(amount: i64, currency: &str) -> DomainResult<Self> {
        let currency = currency.trim();
        if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::validation(format!(
                "currency must be a 3-letter uppercase ISO code, got {currency:?}"
            )));
        }
        Ok(Self(ValueObject::new(MoneyProps {
            amount,
            currency: currency.to_string(),
        })))
    }

    pub fn zero(currency: &str) -> DomainResult<Self> {
        Self::new(0, currency)
    }

    pub fn amount(&self) -> i64 {
        self.0.props().amount
    }

    pub fn currency(&self) -> &str {
        &self.0.props().currency
    }

    /// Sum two amounts of the same currency.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency() != other.currency() {
            return Err(DomainError::invariant(format!(
                "cannot add {} to {}",
                other.currency(),
                self.currency()
            )));
        }
        Money::new(self.amount() + other.amount(), self.currency())
    }

    /// Multiply by a unitless quantity (e.g. line quantity).
    pub fn times(&self, quantity: u32) -> DomainResult<Money> {
        Money::new(self.amount() * i64::from(quantity), self.currency())
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn independently_constructed_amounts_compare_structurally() {
        let a = Money::new(1999, "USD").unwrap();
        let b = Money::new(1999, "USD").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Money::new(1999, "EUR").unwrap());
        assert_ne!(a, Money::new(2000, "USD").unwrap());
    }

    #[test]
    fn rejects_malformed_currency_codes_at_construction() {
        for bad in ["", "us", "usd", "USDX", "U$D"] {
            let err = Money::new(100, bad).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn trims_surrounding_whitespace_from_the_code() {
        let money = Money::new(100, " USD ").unwrap();
        assert_eq!(money.currency(), "USD");
    }

    #[test]
    fn adding_across_currencies_is_an_invariant_violation() {
        let usd = Money::new(100, "USD").unwrap();
        let eur = Money::new(100, "EUR").unwrap();
        assert!(matches!(
            usd.add(&eur).unwrap_err(),
            DomainError::InvariantViolation(_)
        ));
    }

    proptest! {
        /// Property: addition with zero is the identity, and add is
        /// commutative, for any pair of amounts in one currency.
        #[test]
        fn add_is_commutative_with_zero_identity(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let x = Money::new(a, "USD").unwrap();
            let y = Money::new(b, "USD").unwrap();
            let zero = Money::zero("USD").unwrap();

            prop_assert_eq!(x.add(&zero).unwrap(), x.clone());
            prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
        }

        /// Property: structural equality holds across independent
        /// constructions for any amount and valid code.
        #[test]
        fn equality_is_structural(amount in any::<i64>(), code in "[A-Z]{3}") {
            let a = Money::new(amount, &code).unwrap();
            let b = Money::new(amount, &code).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
