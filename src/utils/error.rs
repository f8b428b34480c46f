use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslitError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response shape (HTTP {status}): {message}")]
    DataShape { status: u16, message: String },

    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Transport,
    DataShape,
}

impl TranslitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TranslitError::Transport(_) => ErrorCategory::Transport,
            TranslitError::Parse(_) | TranslitError::DataShape { .. } => ErrorCategory::DataShape,
            TranslitError::InvalidEndpoint { .. }
            | TranslitError::IoError(_)
            | TranslitError::ConfigError { .. }
            | TranslitError::InvalidConfigValueError { .. }
            | TranslitError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Transport => {
                format!("Could not reach the translator service: {}", self)
            }
            ErrorCategory::DataShape => {
                format!("The translator service returned an unexpected reply: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TranslitError::Transport(_) => {
                "Check network access and that AZURE_TRANSLATOR_ENDPOINT points at a reachable host"
            }
            TranslitError::Parse(_) | TranslitError::DataShape { .. } => {
                "Check AZURE_TRANSLATOR_KEY and AZURE_TRANSLATE_REGION; the service usually answers with an error object when credentials are wrong"
            }
            TranslitError::InvalidEndpoint { .. } => {
                "Set AZURE_TRANSLATOR_ENDPOINT to an absolute http(s) URL"
            }
            TranslitError::IoError(_) => "Check that the input or config file is readable",
            TranslitError::ConfigError { .. }
            | TranslitError::InvalidConfigValueError { .. }
            | TranslitError::MissingConfigError { .. } => {
                "Review the configuration file or environment variables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let shape = TranslitError::DataShape {
            status: 401,
            message: "invalid type: map, expected a sequence".to_string(),
        };
        assert_eq!(shape.category(), ErrorCategory::DataShape);

        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert_eq!(TranslitError::from(parse).category(), ErrorCategory::DataShape);

        let endpoint = TranslitError::InvalidEndpoint {
            endpoint: String::new(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(endpoint.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_display_includes_status() {
        let err = TranslitError::DataShape {
            status: 401,
            message: "missing field `text`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response shape (HTTP 401): missing field `text`"
        );
    }
}
