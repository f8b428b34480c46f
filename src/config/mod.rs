#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENDPOINT_VAR: &str = "AZURE_TRANSLATOR_ENDPOINT";
pub const KEY_VAR: &str = "AZURE_TRANSLATOR_KEY";
pub const REGION_VAR: &str = "AZURE_TRANSLATE_REGION";

/// Endpoint and credentials for one Azure Translator resource.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub endpoint: String,
    #[serde(rename = "key")]
    pub subscription_key: String,
    pub region: String,
}

impl TranslatorConfig {
    pub fn new(
        endpoint: impl Into<String>,
        subscription_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            subscription_key: subscription_key.into(),
            region: region.into(),
        }
    }

    /// Reads the three `AZURE_*` variables. Unset values become empty strings
    /// and surface later as a failed call, never here.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(ENDPOINT_VAR).unwrap_or_default(),
            subscription_key: env::var(KEY_VAR).unwrap_or_default(),
            region: env::var(REGION_VAR).unwrap_or_default(),
        }
    }
}

// Keeps the subscription key out of debug logs.
impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.subscription_key.is_empty() { "" } else { "***" };
        f.debug_struct("TranslatorConfig")
            .field("endpoint", &self.endpoint)
            .field("subscription_key", &key)
            .field("region", &self.region)
            .finish()
    }
}

impl ConfigProvider for TranslatorConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn subscription_key(&self) -> &str {
        &self.subscription_key
    }

    fn region(&self) -> &str {
        &self.region
    }
}

impl Validate for TranslatorConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("key", &self.subscription_key)?;
        validate_non_empty_string("region", &self.region)?;
        Ok(())
    }
}
