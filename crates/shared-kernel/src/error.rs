// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VerstampError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VerstampError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, VerstampError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing version component: {field} was not supplied")]
    MissingComponent { field: String },

    #[error("Invalid version component: {field} = '{value}' - {details}")]
    InvalidComponent {
        field: String,
        value: String,
        details: String,
    },

    #[error("Invalid version string '{value}': expected MAJOR.MINOR.PATCH")]
    InvalidVersionString { value: String },

    #[error("Invalid revision identifier '{value}': {details}")]
    InvalidRevision { value: String, details: String },

    #[error("Revision identifier unavailable: {reason}")]
    RevisionUnavailable { reason: String },

    #[error("Invalid constant prefix '{prefix}': {details}")]
    InvalidPrefix { prefix: String, details: String },

    #[error("Unresolved placeholder(s) found: {}", .tokens.join(", "))]
    UnresolvedPlaceholders { tokens: Vec<String> },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Git operation failed: {operation} - {details}")]
    GitError { operation: String, details: String },

    #[error("Environment variable '{name}' is not usable: {details}")]
    EnvVar { name: String, details: String },

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
    #[error("CLI argument parsing failed: {argument} - {reason}")]
    ArgumentParsing { argument: String, reason: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for VerstampError {
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

impl From<serde_json::Error> for VerstampError {
    fn from(err: serde_json::Error) -> Self {
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
    E: Into<VerstampError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| VerstampError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| VerstampError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
