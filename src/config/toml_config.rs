use crate::config::TranslatorConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, TranslitError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub translator: TranslatorConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TranslitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TranslitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TranslitError::ConfigError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn into_translator_config(self) -> TranslatorConfig {
        self.translator
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.translator.endpoint()
    }

    fn subscription_key(&self) -> &str {
        self.translator.subscription_key()
    }

    fn region(&self) -> &str {
        self.translator.region()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.translator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[translator]
endpoint = "https://my-res.cognitiveservices.azure.com/"
key = "abc123"
region = "southeastasia"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.endpoint(), "https://my-res.cognitiveservices.azure.com/");
        assert_eq!(config.subscription_key(), "abc123");
        assert_eq!(config.region(), "southeastasia");
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let toml_content = r#"
[translator]
endpoint = "https://my-res.cognitiveservices.azure.com/"
key = "abc123"
region = "southeastasia"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TRANSLIT_TEST_TOML_KEY", "from-env");

        let toml_content = r#"
[translator]
endpoint = "https://my-res.cognitiveservices.azure.com/"
key = "${TRANSLIT_TEST_TOML_KEY}"
region = "${TRANSLIT_TEST_TOML_UNSET_REGION}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.subscription_key(), "from-env");
        assert_eq!(config.region(), "${TRANSLIT_TEST_TOML_UNSET_REGION}");

        std::env::remove_var("TRANSLIT_TEST_TOML_KEY");
    }

    #[test]
    fn test_missing_translator_section() {
        let err = TomlConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap_err();
        assert!(matches!(err, TranslitError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[translator]
endpoint = "http://localhost:5000"
key = "k"
region = "r"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.into_translator_config(),
            TranslatorConfig::new("http://localhost:5000", "k", "r")
        );
    }
}
