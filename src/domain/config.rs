use crate::error::{PaymentError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

pub type ConfigValue = serde_json::Value;

/// A set of named configuration options.
///
/// Used both for the defaults a provider registers with and for the overrides
/// a caller supplies at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigOptions(BTreeMap<String, ConfigValue>);

impl ConfigOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConfigValue)> {
        self.0.iter()
    }

    /// Returns a copy of `self` where every key present in `overrides` takes
    /// the override's value. Keys only present in `self` are kept as they are.
    pub fn merged_with(&self, overrides: &ConfigOptions) -> ConfigOptions {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Flattens a serializable settings struct into options.
    ///
    /// Anything that does not serialize to a JSON object yields an empty set.
    pub fn from_settings<S: Serialize>(settings: &S) -> Self {
        match serde_json::to_value(settings) {
            Ok(ConfigValue::Object(map)) => map.into_iter().collect(),
            _ => Self::default(),
        }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The resolved options handed to a provider constructor, tagged with the
/// name the provider was requested under.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    provider: String,
    options: ConfigOptions,
}

impl ProviderConfig {
    pub fn new(provider: impl Into<String>, options: ConfigOptions) -> Self {
        Self {
            provider: provider.into(),
            options,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn options(&self) -> &ConfigOptions {
        &self.options
    }

    /// Fails with `UnknownConfig` on the first option not listed in `known`.
    pub fn deny_unknown(&self, known: &[&str]) -> Result<()> {
        match self.options.iter().find(|(key, _)| !known.contains(&key.as_str())) {
            Some((key, _)) => Err(PaymentError::UnknownConfig {
                provider: self.provider.clone(),
                key: key.clone(),
                known: known.iter().map(|k| k.to_string()).collect(),
            }),
            None => Ok(()),
        }
    }

    /// Reads a required option. A missing or `null` value is a
    /// `MissingConfig` error.
    pub fn require<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.optional(key)?
            .ok_or_else(|| PaymentError::MissingConfig {
                provider: self.provider.clone(),
                key: key.to_string(),
            })
    }

    /// Reads an optional option, falling back to `fallback` when absent.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T> {
        Ok(self.optional(key)?.unwrap_or(fallback))
    }

    fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.options.get(key) {
            None | Some(ConfigValue::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|source| PaymentError::InvalidConfig {
                    provider: self.provider.clone(),
                    key: key.to_string(),
                    source,
                }),
        }
    }
}
