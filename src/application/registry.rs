use crate::domain::config::ConfigOptions;
use crate::domain::ports::ProviderConstructor;
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::fmt;

/// One registered provider kind.
pub struct RegistryEntry {
    name: String,
    constructor: ProviderConstructor,
    default_config: ConfigOptions,
}

impl RegistryEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constructor(&self) -> &ProviderConstructor {
        &self.constructor
    }

    /// Returns a copy of the registered defaults.
    pub fn default_config(&self) -> ConfigOptions {
        self.default_config.clone()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("default_config", &self.default_config)
            .finish_non_exhaustive()
    }
}

/// Name-keyed store of provider constructors and their default configuration.
///
/// Entries are append-only: registration takes `&mut self`, so once the
/// registry is shared behind a reference or an `Arc` it can only be read.
/// Names are kept in insertion order.
#[derive(Default)]
pub struct ProviderRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
}

impl ProviderRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider kind under `name`.
    ///
    /// Fails with `DuplicateProvider` if the name is taken; the existing
    /// entry is left in place.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        constructor: ProviderConstructor,
        default_config: ConfigOptions,
    ) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(PaymentError::ValidationError(
                "Provider name must not be empty".to_string(),
            ));
        }
        if self.index.contains_key(&name) {
            return Err(PaymentError::DuplicateProvider(name));
        }

        tracing::debug!(provider = %name, options = default_config.len(), "registered provider");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            name,
            constructor,
            default_config,
        });
        Ok(())
    }

    /// Finds the entry registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&RegistryEntry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| PaymentError::UnknownProvider {
                name: name.to_string(),
                known: self.list_names(),
            })
    }

    /// Registered names, in registration order.
    pub fn list_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ProviderConfig;
    use crate::domain::ports::PaymentProviderBox;

    fn failing_constructor(tag: &'static str) -> ProviderConstructor {
        Box::new(move |_: ProviderConfig| -> Result<PaymentProviderBox> {
            Err(PaymentError::ValidationError(tag.to_string()))
        })
    }

    fn build(entry: &RegistryEntry) -> Result<PaymentProviderBox> {
        let config = ProviderConfig::new(entry.name(), entry.default_config());
        (entry.constructor())(config)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ProviderRegistry::new();
        registry
            .register(
                "stripe",
                failing_constructor("stripe"),
                ConfigOptions::new().with("api_key", "sk_test_123"),
            )
            .unwrap();

        let entry = registry.lookup("stripe").unwrap();
        assert_eq!(entry.name(), "stripe");
        assert_eq!(
            entry.default_config(),
            ConfigOptions::new().with("api_key", "sk_test_123")
        );
    }

    #[test]
    fn test_duplicate_name_keeps_first_entry() {
        let mut registry = ProviderRegistry::new();
        registry
            .register("stripe", failing_constructor("first"), ConfigOptions::new().with("v", 1))
            .unwrap();

        let result = registry.register(
            "stripe",
            failing_constructor("second"),
            ConfigOptions::new().with("v", 2),
        );
        assert!(matches!(result, Err(PaymentError::DuplicateProvider(ref n)) if n == "stripe"));

        let entry = registry.lookup("stripe").unwrap();
        assert_eq!(entry.default_config(), ConfigOptions::new().with("v", 1));
        assert!(matches!(
            build(entry),
            Err(PaymentError::ValidationError(ref tag)) if tag == "first"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = ProviderRegistry::new();
        let result = registry.register("", failing_constructor("x"), ConfigOptions::new());
        assert!(matches!(result, Err(PaymentError::ValidationError(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_unknown_lists_known_names() {
        let mut registry = ProviderRegistry::new();
        registry
            .register("stripe", failing_constructor("s"), ConfigOptions::new())
            .unwrap();
        registry
            .register("paypal", failing_constructor("p"), ConfigOptions::new())
            .unwrap();

        match registry.lookup("doesnotexist") {
            Err(PaymentError::UnknownProvider { name, known }) => {
                assert_eq!(name, "doesnotexist");
                assert_eq!(known, vec!["stripe", "paypal"]);
            }
            other => panic!("expected UnknownProvider, got {other:?}"),
        }
    }

    #[test]
    fn test_list_names_in_insertion_order() {
        let mut registry = ProviderRegistry::new();
        for name in ["stripe", "paypal", "square"] {
            registry
                .register(name, failing_constructor("x"), ConfigOptions::new())
                .unwrap();
        }
        assert_eq!(registry.list_names(), vec!["stripe", "paypal", "square"]);
    }

    #[test]
    fn test_default_config_is_copy_on_read() {
        let mut registry = ProviderRegistry::new();
        registry
            .register("stripe", failing_constructor("x"), ConfigOptions::new().with("api_key", "a"))
            .unwrap();

        let mut copy = registry.lookup("stripe").unwrap().default_config();
        copy.set("api_key", "tampered");

        assert_eq!(
            registry.lookup("stripe").unwrap().default_config(),
            ConfigOptions::new().with("api_key", "a")
        );
    }
}
