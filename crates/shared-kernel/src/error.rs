// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum RouteCountError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<RouteCountError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, RouteCountError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Traversal of '{root}' aborted: {source}")]
    TraversalFailed {
        root: PathBuf,
        #[source]
        source: Box<RouteCountError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML in '{path}': {details}")]
    XmlParse { path: PathBuf, details: String },

    #[error("'{path}' is not valid UTF-8: {details}")]
    InvalidEncoding { path: PathBuf, details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl RouteCountError {
    /// Returns the innermost error, skipping any `Context` wrappers.
    pub fn root_cause(&self) -> &RouteCountError {
        match self {
            Self::Context { source, .. }
            | Self::Application(ApplicationError::TraversalFailed { source, .. }) => source.root_cause(),
            other => other,
        }
    }

    /// Whether the failure came from malformed or undecodable XML content.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Infrastructure(InfrastructureError::XmlParse { .. } | InfrastructureError::InvalidEncoding { .. })
        )
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for RouteCountError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RouteCountError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RouteCountError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<RouteCountError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RouteCountError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| RouteCountError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
