use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Prediction request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Prediction service returned status {status} from {endpoint}")]
    ServiceError { status: u16, endpoint: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Artifact not found: {path}")]
    MissingArtifact { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Artifact,
    Data,
    Config,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::ApiError(_) | DashboardError::ServiceError { .. } => {
                ErrorCategory::Network
            }
            DashboardError::MissingArtifact { .. } | DashboardError::IoError(_) => {
                ErrorCategory::Artifact
            }
            DashboardError::CsvError(_) | DashboardError::SerializationError(_) => {
                ErrorCategory::Data
            }
            DashboardError::ConfigError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤重試通常可解
            DashboardError::ApiError(_) | DashboardError::ServiceError { .. } => {
                ErrorSeverity::Medium
            }
            // 缺少模型檔案時無法啟動
            DashboardError::MissingArtifact { .. } => ErrorSeverity::Critical,
            DashboardError::CsvError(_)
            | DashboardError::IoError(_)
            | DashboardError::SerializationError(_) => ErrorSeverity::High,
            DashboardError::ConfigError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::ApiError(_) => {
                "Prediction service unavailable: the request could not be completed".to_string()
            }
            DashboardError::ServiceError { status, .. } => {
                format!("Prediction service unavailable (HTTP {})", status)
            }
            DashboardError::MissingArtifact { path } => {
                format!("{} file not found. Please make sure the file is in place", path)
            }
            DashboardError::InvalidConfigValueError { field, value, .. } => {
                format!("Invalid value for {}: '{}'", field, value)
            }
            DashboardError::MissingConfigError { field } => {
                format!("Missing required configuration: {}", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::ApiError(_) | DashboardError::ServiceError { .. } => {
                "Check network connectivity and that the prediction service is up, then try again"
                    .to_string()
            }
            DashboardError::MissingArtifact { .. } => {
                "Restore the missing artifact from the training pipeline output".to_string()
            }
            DashboardError::CsvError(_) | DashboardError::SerializationError(_) => {
                "Re-export the artifact; the file on disk appears malformed".to_string()
            }
            DashboardError::IoError(_) => {
                "Check file permissions and that the configured directories exist".to_string()
            }
            DashboardError::ConfigError { .. }
            | DashboardError::InvalidConfigValueError { .. }
            | DashboardError::MissingConfigError { .. } => {
                "Run with --help to see the accepted flags and value ranges".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_message_names_the_path() {
        let err = DashboardError::MissingArtifact {
            path: "models/scaler.pkl".to_string(),
        };
        assert!(err.to_string().contains("models/scaler.pkl"));
        assert!(err.user_friendly_message().contains("models/scaler.pkl"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Artifact);
    }

    #[test]
    fn test_service_error_is_retryable_severity() {
        let err = DashboardError::ServiceError {
            status: 503,
            endpoint: "https://example.com/predict/kmeans".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("503"));
    }
}
