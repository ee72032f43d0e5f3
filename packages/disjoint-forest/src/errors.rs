//! Error types for disjoint-forest
//!
//! Structural answers ("not a tree") are never errors. Errors mean the
//! caller passed something the forest cannot interpret.

use std::fmt;
use thiserror::Error;

/// Forest error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Negative vertex count, oversized graph, out-of-range endpoint
    InvalidArgument,
    /// Key was never registered with `make_set`
    NotFound,
    /// Malformed graph input document
    Parse,
    /// Graph input could not be read
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Parse => "parse",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Forest error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct ForestError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl ForestError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn not_found(key: impl fmt::Debug) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Key {:?} was not found", key),
        )
    }

    pub fn vertex_out_of_range(vertex: i64, n: i64) -> Self {
        Self::invalid_argument(format!(
            "Edge contains invalid vertex index {} (expected 0..{})",
            vertex, n
        ))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl From<serde_json::Error> for ForestError {
    fn from(err: serde_json::Error) -> Self {
        ForestError::parse(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<std::io::Error> for ForestError {
    fn from(err: std::io::Error) -> Self {
        ForestError::new(ErrorKind::Io, format!("Cannot read graph input: {}", err))
            .with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ForestError>;
