use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Provider {0:?} is already registered")]
    DuplicateProvider(String),
    #[error("Unknown provider {name:?}. Known providers: [{}]", .known.join(", "))]
    UnknownProvider { name: String, known: Vec<String> },
    #[error("Provider {provider:?} requires config option {key:?}")]
    MissingConfig { provider: String, key: String },
    #[error("Config option {key:?} for provider {provider:?} is invalid: {source}")]
    InvalidConfig {
        provider: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(
        "Provider {provider:?} has no config option {key:?}. Known options: [{}]",
        .known.join(", ")
    )]
    UnknownConfig {
        provider: String,
        key: String,
        known: Vec<String>,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("{provider} declined the charge: {reason}")]
    Declined { provider: String, reason: String },
    #[error("Provider {0:?} does not support refunds")]
    RefundUnsupported(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_lists_known_names() {
        let err = PaymentError::UnknownProvider {
            name: "doesnotexist".to_string(),
            known: vec!["stripe".to_string(), "paypal".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown provider \"doesnotexist\". Known providers: [stripe, paypal]"
        );
    }
}
