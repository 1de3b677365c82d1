//! Built-in payment providers.

pub mod paypal;
pub mod square;
pub mod stripe;

use crate::application::providers::PaymentProviders;
use crate::error::Result;

/// Registers every built-in provider: `stripe`, `paypal`, then `square`.
///
/// Must run once, before the first `from_name`.
pub fn register_all(providers: &mut PaymentProviders) -> Result<()> {
    providers.register::<stripe::StripeProvider>()?;
    providers.register::<paypal::PayPalProvider>()?;
    providers.register::<square::SquareProvider>()?;
    Ok(())
}

/// A facade with every built-in provider registered.
pub fn default_providers() -> Result<PaymentProviders> {
    let mut providers = PaymentProviders::new();
    register_all(&mut providers)?;
    Ok(providers)
}
