use thiserror::Error;

#[derive(Error, Debug)]
pub enum RsvpError {
    #[error("{}", .messages.join(" • "))]
    ValidationError { messages: Vec<String> },

    #[error("At least one guest is required")]
    MinimumGuestError,

    #[error("Stored draft could not be read: {0}")]
    DeserializationError(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No guest row with id {0}")]
    UnknownRowError(u64),

    #[error("No handler registered for trigger {0}")]
    UnhandledTriggerError(String),
}

impl RsvpError {
    /// Errors the form recovers from without leaving the current screen.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RsvpError::ValidationError { .. }
                | RsvpError::MinimumGuestError
                | RsvpError::DeserializationError(_)
                | RsvpError::UnknownRowError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RsvpError::ValidationError { .. } | RsvpError::MinimumGuestError => self.to_string(),
            RsvpError::DeserializationError(_) => "Saved draft was unreadable and was ignored".to_string(),
            RsvpError::IoError(e) => format!("Could not access the draft file: {}", e),
            RsvpError::ConfigError { .. } | RsvpError::InvalidConfigValueError { .. } => {
                format!("Please check your configuration: {}", self)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RsvpError>;
