use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative monetary amount in major currency units.
///
/// Wraps `rust_decimal::Decimal` so that the scale of the input is kept
/// exactly: `49.99` is echoed back as `49.99`, never as a float approximation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(PaymentError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PaymentError::ValidationError(format!("Invalid amount {s:?}: {e}")))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of a successful charge, shared by every provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Registered name of the provider that issued the charge.
    pub provider: String,
    /// Identifier of the transaction, unique per provider.
    pub transaction_id: String,
    pub amount: Amount,
    pub currency: String,
}

impl ChargeResult {
    /// Builds a result for `provider` with a freshly generated transaction id.
    pub fn issue(provider: &str, amount: Amount, currency: &str) -> Self {
        Self {
            provider: provider.to_string(),
            transaction_id: format!("{provider}_tx_{}", uuid::Uuid::new_v4().simple()),
            amount,
            currency: currency.to_string(),
        }
    }
}
