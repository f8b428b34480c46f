pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, TranslatorConfig};
pub use core::client::{transliterate_to_sinhala, AzureTransliterator};
pub use domain::ports::{ConfigProvider, Transliterator};
pub use utils::error::{ErrorCategory, Result, TranslitError};
