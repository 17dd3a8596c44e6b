use thiserror::Error;

#[derive(Error, Debug)]
pub enum HouseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error for '{field}': {value} ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Rendering,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HouseError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        HouseError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HouseError::ValidationError { .. } => ErrorCategory::Validation,
            HouseError::ConfigError { .. }
            | HouseError::InvalidConfigValueError { .. }
            | HouseError::MissingConfigError { .. }
            | HouseError::TomlError(_) => ErrorCategory::Configuration,
            HouseError::SerializationError(_) | HouseError::TemplateError(_) => {
                ErrorCategory::Rendering
            }
            HouseError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HouseError::ValidationError { field, .. } => format!(
                "Check '{}': dimensions and prices must be finite numbers greater than zero",
                field
            ),
            HouseError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            HouseError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            HouseError::TomlError(_) | HouseError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            HouseError::IoError(_) => {
                "Check that the output directory is writable and the paths exist".to_string()
            }
            HouseError::SerializationError(_) | HouseError::TemplateError(_) => {
                "This is an internal rendering problem; try another --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HouseError::ValidationError {
                field,
                value,
                reason,
            } => format!("Invalid {}: {} ({})", field, value, reason),
            HouseError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration value '{}' = {} is invalid: {}", field, value, reason),
            HouseError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            HouseError::TomlError(e) => format!("Could not parse the configuration file: {}", e),
            HouseError::ConfigError { message } => format!("Configuration problem: {}", message),
            HouseError::IoError(e) => format!("File operation failed: {}", e),
            HouseError::SerializationError(e) => format!("Could not serialize the report: {}", e),
            HouseError::TemplateError(e) => format!("Could not render the report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, HouseError>;
