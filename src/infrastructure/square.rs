use crate::domain::charge::{Amount, ChargeResult};
use crate::domain::config::{ConfigOptions, ProviderConfig};
use crate::domain::ports::{PaymentProvider, ProviderVariant};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use serde::Serialize;

pub const DEFAULT_LOCATION_ID: &str = "LOC_123";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareSettings {
    pub access_token: String,
    /// Falls back to `DEFAULT_LOCATION_ID` when not configured.
    pub location_id: String,
}

#[derive(Debug, Clone)]
pub struct SquareProvider {
    settings: SquareSettings,
}

impl SquareProvider {
    pub fn new(settings: SquareSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SquareSettings {
        &self.settings
    }
}

impl ProviderVariant for SquareProvider {
    const NAME: &'static str = "square";
    const OPTIONS: &'static [&'static str] = &["access_token", "location_id"];

    fn default_options() -> ConfigOptions {
        ConfigOptions::new()
            .with("access_token", "sq_test_token")
            .with("location_id", DEFAULT_LOCATION_ID)
    }

    fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self::new(SquareSettings {
            access_token: config.require("access_token")?,
            location_id: config.get_or("location_id", DEFAULT_LOCATION_ID.to_string())?,
        }))
    }
}

#[async_trait]
impl PaymentProvider for SquareProvider {
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
                reason: "missing payment source".to_string(),
            });
        }
        Ok(ChargeResult::issue(Self::NAME, amount, currency))
    }
}
