use crate::domain::config::{ConfigOptions, ConfigValue};
use crate::error::{PaymentError, Result};

/// Parses a `key=value` pair. The value is kept as a string; everything
/// after the first `=` belongs to it.
pub fn parse_override(raw: &str) -> Result<(String, ConfigValue)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        PaymentError::ValidationError(format!("Expected key=value, got {raw:?}"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(PaymentError::ValidationError(format!(
            "Missing option name in {raw:?}"
        )));
    }
    Ok((key.to_string(), ConfigValue::String(value.to_string())))
}

/// Collects parsed pairs into overrides; a later pair for the same key wins.
pub fn into_options(pairs: Vec<(String, ConfigValue)>) -> ConfigOptions {
    pairs.into_iter().collect()
}
