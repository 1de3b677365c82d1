use super::registry::ProviderRegistry;
use crate::domain::config::{ConfigOptions, ProviderConfig};
use crate::domain::ports::{PaymentProviderBox, ProviderConstructor, ProviderVariant};
use crate::error::Result;

/// Entry point for building payment providers by name.
///
/// `PaymentProviders` owns the registry. Variants are registered during
/// start-up (see `infrastructure::register_all`); afterwards the facade is
/// typically wrapped in an `Arc` and only read, so lookups from many tasks
/// need no locking.
#[derive(Debug, Default)]
pub struct PaymentProviders {
    registry: ProviderRegistry,
}

impl PaymentProviders {
    /// Creates a facade with no providers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade over an already populated registry.
    pub fn with_registry(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Registers a provider kind under `name` with its default options.
    pub fn register_variant(
        &mut self,
        name: impl Into<String>,
        constructor: ProviderConstructor,
        default_config: ConfigOptions,
    ) -> Result<()> {
        self.registry.register(name, constructor, default_config)
    }

    /// Registers `V` under `V::NAME` with `V::default_options()`.
    pub fn register<V: ProviderVariant>(&mut self) -> Result<()> {
        self.register_variant(V::NAME, V::constructor(), V::default_options())
    }

    /// Builds the provider registered under `name`.
    ///
    /// Each key in `overrides` replaces the registered default for that key;
    /// every other key keeps its default.
    pub fn from_name(&self, name: &str, overrides: &ConfigOptions) -> Result<PaymentProviderBox> {
        let entry = self.registry.lookup(name)?;
        let merged = entry.default_config().merged_with(overrides);
        tracing::debug!(
            provider = %name,
            overridden = overrides.len(),
            "constructing provider"
        );
        (entry.constructor())(ProviderConfig::new(name, merged))
    }

    /// Names of every registered provider, in registration order.
    pub fn list_available(&self) -> Vec<String> {
        self.registry.list_names()
    }

    /// Copy of the defaults registered for `name`.
    pub fn default_config(&self, name: &str) -> Result<ConfigOptions> {
        Ok(self.registry.lookup(name)?.default_config())
    }
}
