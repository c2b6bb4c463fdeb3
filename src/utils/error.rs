use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("No URL available for classification")]
    NoUrl,

    #[error("Prediction request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Prediction endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed prediction response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Prediction response violates protocol: {message}")]
    Protocol { message: String },

    #[error("Prediction service reported: {message}")]
    Service { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Protocol,
    Service,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClassifierError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoUrl => ErrorCategory::Input,
            Self::Transport(_) | Self::HttpStatus { .. } => ErrorCategory::Network,
            Self::Parse(_) | Self::Protocol { .. } => ErrorCategory::Protocol,
            Self::Service { .. } => ErrorCategory::Service,
            Self::Config { .. } | Self::InvalidConfigValue { .. } | Self::Toml(_) => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Service => ErrorSeverity::Medium,
            ErrorCategory::Protocol | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NoUrl => "No URL was provided to check.".to_string(),
            Self::Transport(_) => "Could not reach the prediction service.".to_string(),
            Self::HttpStatus { status } => {
                format!("The prediction service answered with HTTP {}.", status)
            }
            Self::Parse(_) | Self::Protocol { .. } => {
                "The prediction service sent an unexpected response.".to_string()
            }
            Self::Service { message } => message.clone(),
            Self::Config { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            Self::Io(e) => format!("File access failed: {}", e),
            Self::Toml(_) => "The configuration file is not valid TOML.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Pass a URL with --url",
            ErrorCategory::Network => {
                "Check that the prediction service is running and the endpoint is correct"
            }
            ErrorCategory::Protocol => {
                "Make sure the endpoint returns {\"prediction\": ...} or {\"error\": ...}"
            }
            ErrorCategory::Service => "Inspect the prediction service logs",
            ErrorCategory::Configuration => "Fix the configuration value and try again",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
