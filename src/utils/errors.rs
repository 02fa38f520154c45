use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        file: Option<PathBuf>,
    },

    #[error("Base directory must be absolute: {}", .0.display())]
    InvalidBaseDir(PathBuf),

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PackError {
    /// Create a configuration error that is not tied to a file
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            file: None,
        }
    }

    /// Create a configuration error raised while reading `file`
    pub fn config_in_file(message: impl Into<String>, file: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            file: Some(file),
        }
    }

    /// Format error with the offending file, when one is known
    pub fn format_detailed(&self) -> String {
        match self {
            PackError::Config {
                message,
                file: Some(file),
            } => format!("❌ Configuration Error: {}\n📁 File: {}", message, file.display()),
            PackError::Config { message, file: None } => {
                format!("❌ Configuration Error: {}", message)
            }
            _ => format!("❌ {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PackError>;
