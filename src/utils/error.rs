use thiserror::Error;

#[derive(Error, Debug)]
pub enum SectionError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SectionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SectionError::ApiError(_) | SectionError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            SectionError::IoError(_) => ErrorCategory::Storage,
            SectionError::SerializationError(_) => ErrorCategory::Data,
            SectionError::ConfigValidationError { .. }
            | SectionError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SectionError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Transient: a later run may succeed.
            SectionError::ApiError(_) | SectionError::HttpStatusError { .. } => {
                ErrorSeverity::Medium
            }
            SectionError::SerializationError(_) | SectionError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            SectionError::ConfigValidationError { .. }
            | SectionError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SectionError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SectionError::ApiError(e) if e.is_timeout() => {
                "Increase the request timeout or check that the partners API is reachable".to_string()
            }
            SectionError::ApiError(_) => {
                "Check network connectivity and the partners API endpoint".to_string()
            }
            SectionError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check the authorization headers sent to the partners API".to_string()
            }
            SectionError::HttpStatusError { .. } => {
                "Verify the endpoint path and retry once the API is healthy".to_string()
            }
            SectionError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            SectionError::SerializationError(_) => {
                "The API payload does not match the partner format; inspect the response".to_string()
            }
            SectionError::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            SectionError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            SectionError::ProcessingError { .. } => {
                "Re-run with --verbose to see the failing step".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the partners API: {}", self),
            ErrorCategory::Storage => format!("Could not write the rendered section: {}", self),
            ErrorCategory::Data => format!("Partner data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Rendering failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SectionError>;
