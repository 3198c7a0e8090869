use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Profile parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Template not found for page '{page}'")]
    TemplateNotFound { page: String },

    #[error("Template rendering error: {message}")]
    TemplateError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::TemplateNotFound { .. } => ErrorSeverity::Low,
            PortfolioError::TemplateError { .. } | PortfolioError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            PortfolioError::ConfigError { .. }
            | PortfolioError::MissingConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::TomlError(_) => ErrorSeverity::High,
            PortfolioError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PortfolioError::MissingConfigError { field } => {
                format!("Provide '{}' via its command-line flag or environment variable", field)
            }
            PortfolioError::ConfigValidationError { field, .. }
            | PortfolioError::InvalidConfigValueError { field, .. } => {
                format!("Check the value supplied for '{}'", field)
            }
            PortfolioError::TomlError(_) | PortfolioError::ConfigError { .. } => {
                "Make sure the profile file exists and is valid TOML".to_string()
            }
            PortfolioError::TemplateNotFound { page } => {
                format!("Add '{}.html' to the templates directory", page)
            }
            PortfolioError::TemplateError { .. } => {
                "Check the template placeholders against the profile fields".to_string()
            }
            PortfolioError::IoError(_) => "Check file paths and permissions".to_string(),
            PortfolioError::SerializationError(_) => {
                "Check the profile for values JSON cannot represent".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::MissingConfigError { field } => {
                format!("Startup aborted: '{}' is not configured", field)
            }
            PortfolioError::TemplateNotFound { page } => format!("Page '{}' is not available", page),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
