use super::charge::{Amount, ChargeResult};
use super::config::{ConfigOptions, ProviderConfig};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;

/// The capability every payment provider implements.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Name the provider was registered under.
    fn name(&self) -> &str;

    /// Effective options after defaults, overrides and fallbacks were applied.
    fn options(&self) -> ConfigOptions;

    /// Charges `amount` in `currency` against the variant-specific `source`
    /// (card string, token, email...).
    async fn charge(&self, amount: Amount, currency: &str, source: &str) -> Result<ChargeResult>;

    /// Refunds a previous charge, fully when `amount` is `None`.
    async fn refund(&self, _charge: &ChargeResult, _amount: Option<Amount>) -> Result<bool> {
        Err(PaymentError::RefundUnsupported(self.name().to_string()))
    }
}

pub type PaymentProviderBox = Box<dyn PaymentProvider>;

/// Builds a provider from its merged configuration.
pub type ProviderConstructor =
    Box<dyn Fn(ProviderConfig) -> Result<PaymentProviderBox> + Send + Sync>;

/// A provider kind that can register itself by name.
///
/// Implementors pair a registry name and default options with a typed
/// constructor; `PaymentProviders::register` turns this into a registry entry.
pub trait ProviderVariant: PaymentProvider + Sized + 'static {
    const NAME: &'static str;

    /// Every option name the variant understands.
    const OPTIONS: &'static [&'static str];

    fn default_options() -> ConfigOptions;

    fn from_config(config: &ProviderConfig) -> Result<Self>;

    fn constructor() -> ProviderConstructor {
        Box::new(|config: ProviderConfig| -> Result<PaymentProviderBox> {
            config.deny_unknown(Self::OPTIONS)?;
            Ok(Box::new(Self::from_config(&config)?))
        })
    }
}
