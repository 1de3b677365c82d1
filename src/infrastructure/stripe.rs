use crate::domain::charge::{Amount, ChargeResult};
use crate::domain::config::{ConfigOptions, ProviderConfig};
use crate::domain::ports::{PaymentProvider, ProviderVariant};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripeSettings {
    pub api_key: String,
}

/// Card payments through Stripe. The only built-in provider that refunds.
#[derive(Debug, Clone)]
pub struct StripeProvider {
    settings: StripeSettings,
}

impl StripeProvider {
    pub fn new(settings: StripeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &StripeSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut StripeSettings {
        &mut self.settings
    }
}

impl ProviderVariant for StripeProvider {
    const NAME: &'static str = "stripe";
    const OPTIONS: &'static [&'static str] = &["api_key"];

    fn default_options() -> ConfigOptions {
        ConfigOptions::new().with("api_key", "sk_test_123")
    }

    fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::new(StripeSettings {
            api_key: config.require("api_key")?,
        }))
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn options(&self) -> ConfigOptions {
        ConfigOptions::from_settings(&self.settings)
    }

    async fn charge(&self, amount: Amount, currency: &str, source: &str) -> Result<ChargeResult> {
        if source.trim().is_empty() {
            return Err(PaymentError::Declined {
                provider: Self::NAME.to_string(),
                reason: "missing card source".to_string(),
            });
        }
        Ok(ChargeResult::issue(Self::NAME, amount, currency))
    }

    async fn refund(&self, charge: &ChargeResult, amount: Option<Amount>) -> Result<bool> {
        if charge.provider != Self::NAME {
            return Ok(false);
        }
        let amount = amount.unwrap_or(charge.amount);
        Ok(amount <= charge.amount)
    }
}
