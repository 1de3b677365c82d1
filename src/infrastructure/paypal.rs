use crate::domain::charge::{Amount, ChargeResult};
use crate::domain::config::{ConfigOptions, ProviderConfig};
use crate::domain::ports::{PaymentProvider, ProviderVariant};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayPalSettings {
    pub client_id: String,
    pub secret: String,
}

/// PayPal checkout. `source` is the payer's PayPal email or token.
#[derive(Debug, Clone)]
pub struct PayPalProvider {
    settings: PayPalSettings,
}

impl PayPalProvider {
    pub fn new(settings: PayPalSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PayPalSettings {
        &self.settings
    }
}

impl ProviderVariant for PayPalProvider {
    const NAME: &'static str = "paypal";
    const OPTIONS: &'static [&'static str] = &["client_id", "secret"];

    fn default_options() -> ConfigOptions {
        ConfigOptions::new()
            .with("client_id", "my-app")
            .with("secret", "super-secret")
    }

    fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::new(PayPalSettings {
            client_id: config.require("client_id")?,
            secret: config.require("secret")?,
        }))
    }
}

#[async_trait]
impl PaymentProvider for PayPalProvider {
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
                reason: "missing payer account".to_string(),
            });
        }
        Ok(ChargeResult::issue(Self::NAME, amount, currency))
    }
}
