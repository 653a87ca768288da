use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument {
            message: message.into(),
        }
    }

    /// 是否為運算參數錯誤 (例如除以零)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalcError::InvalidArgument { .. })
    }

    /// 是否為配置相關錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CalcError::ConfigError { .. }
                | CalcError::ConfigValidationError { .. }
                | CalcError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
