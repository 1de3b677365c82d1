use crate::domain::charge::{Amount, ChargeResult};
use crate::domain::ports::PaymentProviderBox;
use crate::error::Result;

/// Takes payments through whichever provider it was given.
///
/// Depends only on the `PaymentProvider` capability, never on a concrete
/// variant.
pub struct CheckoutService {
    provider: PaymentProviderBox,
}

impl CheckoutService {
    pub fn new(provider: PaymentProviderBox) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Charges the customer. Provider errors are returned unchanged.
    pub async fn process_payment(
        &self,
        amount: Amount,
        currency: &str,
        source: &str,
    ) -> Result<ChargeResult> {
        let result = self.provider.charge(amount, currency, source).await?;
        tracing::info!(
            provider = %result.provider,
            transaction_id = %result.transaction_id,
            amount = %result.amount,
            currency = %result.currency,
            "payment processed"
        );
        Ok(result)
    }
}
