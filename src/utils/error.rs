use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Required fragment missing: {file}")]
    MissingRequiredFragment { file: String },

    #[error("Response fragment missing: {file}")]
    MissingResponseFragment { file: String },

    #[error("Malformed fragment {file}: {source}")]
    MalformedFragment {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl SchemaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SchemaError::MissingRequiredFragment { .. }
            | SchemaError::MissingResponseFragment { .. }
            | SchemaError::MalformedFragment { .. } => ErrorCategory::Input,
            SchemaError::WriteFailure { .. } | SchemaError::SerializationError(_) => {
                ErrorCategory::Output
            }
            SchemaError::ConfigError { .. } | SchemaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SchemaError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SchemaError::MissingRequiredFragment { file } => format!(
                "Generate the contract schema first so that {} exists in the schema directory",
                file
            ),
            SchemaError::MissingResponseFragment { file } => format!(
                "Check the [responses] table; {} is not in the schema directory",
                file
            ),
            SchemaError::MalformedFragment { file, .. } => {
                format!("Regenerate {} or fix its JSON syntax", file)
            }
            SchemaError::WriteFailure { path, .. } => format!(
                "Check permissions and free space for {}",
                path.display()
            ),
            SchemaError::IoError(_) => {
                "Check that the schema directory exists and is readable".to_string()
            }
            SchemaError::SerializationError(_) => {
                "The composed schema could not be encoded; re-run with --verbose".to_string()
            }
            SchemaError::ConfigError { .. } | SchemaError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the config file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SchemaError::MissingRequiredFragment { file } => {
                format!("Cannot build the full schema: {} not found", file)
            }
            SchemaError::MissingResponseFragment { file } => {
                format!("Cannot build the full schema: response file {} not found", file)
            }
            SchemaError::MalformedFragment { file, source } => {
                format!("{} is not valid JSON ({})", file, source)
            }
            SchemaError::WriteFailure { path, source } => {
                format!("Could not write {} ({})", path.display(), source)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
