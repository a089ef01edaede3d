use std::io;

use thiserror::Error;

/// Library-wide error type for elvite operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input rejected by a validation rule.
    #[error("{0}")]
    Validation(String),

    /// A project manifest already exists at the target location.
    #[error("package.json already exists in {0}")]
    ProjectExists(String),

    /// No project manifest found in the target directory.
    #[error("No package.json found in {0}")]
    ProjectNotFound(String),

    /// A project file required by the command is missing.
    #[error("{0} not found. Run 'elvite main gen' or import it first.")]
    FileNotFound(String),

    /// Only package.json and main.js can be imported.
    #[error("Unsupported file '{0}': only package.json and main.js can be imported")]
    InvalidFileType(String),

    /// Path escapes the project root.
    #[error("Path '{0}' escapes the project directory")]
    PathTraversal(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Archive assembly failed.
    #[error("Failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Embedded asset or template defect.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Validation(_)
            | AppError::InvalidFileType(_)
            | AppError::PathTraversal(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectNotFound(_) | AppError::FileNotFound(_) => io::ErrorKind::NotFound,
            AppError::ProjectExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Archive(_) | AppError::InternalError(_) => io::ErrorKind::Other,
        }
    }
}
