#![allow(dead_code)]

use async_trait::async_trait;
use paygate::domain::charge::{Amount, ChargeResult};
use paygate::domain::config::{ConfigOptions, ProviderConfig};
use paygate::domain::ports::{PaymentProvider, ProviderVariant};
use paygate::error::Result;

/// Provider that stores its resolved config verbatim.
pub struct RecordingProvider {
    pub config: ProviderConfig,
}

#[async_trait]
impl PaymentProvider for RecordingProvider {
    fn name(&self) -> &str {
        self.config.provider()
    }

    fn options(&self) -> ConfigOptions {
        self.config.options().clone()
    }

    async fn charge(&self, amount: Amount, currency: &str, _source: &str) -> Result<ChargeResult> {
        Ok(ChargeResult::issue(self.name(), amount, currency))
    }
}

impl ProviderVariant for RecordingProvider {
    const NAME: &'static str = "recording";
    const OPTIONS: &'static [&'static str] = &["a", "b"];

    fn default_options() -> ConfigOptions {
        ConfigOptions::new().with("a", 1).with("b", 2)
    }

    fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
        })
    }
}

/// Provider whose `api_key` has no default.
pub struct KeyedProvider {
    pub api_key: String,
}

#[async_trait]
impl PaymentProvider for KeyedProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn options(&self) -> ConfigOptions {
        ConfigOptions::new().with("api_key", self.api_key.clone())
    }

    async fn charge(&self, amount: Amount, currency: &str, _source: &str) -> Result<ChargeResult> {
        Ok(ChargeResult::issue(Self::NAME, amount, currency))
    }
}

impl ProviderVariant for KeyedProvider {
    const NAME: &'static str = "keyed";
    const OPTIONS: &'static [&'static str] = &["api_key"];

    fn default_options() -> ConfigOptions {
        ConfigOptions::new()
    }

    fn from_config(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            api_key: config.require("api_key")?,
        })
    }
}
