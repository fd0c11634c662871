//! Error types for clash-groups operations.
//!
//! This module provides the error hierarchy using `thiserror` for
//! section extraction, group rendering, file I/O, and CLI commands.

use thiserror::Error;

/// Result type alias for clash-groups operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Name extraction errors (section lookup, empty results).
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Group construction errors.
    #[error("grouping error: {0}")]
    Group(#[from] GroupError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Short machine-readable label for the error category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Extract(ExtractError::MissingSection { .. }) => "missing_section",
            Self::Extract(ExtractError::NoNamesParsed) => "no_names_parsed",
            Self::Group(_) => "invalid_group_config",
            Self::Io(IoError::WriteFailed { .. } | IoError::DirectoryFailed { .. }) => {
                "output_access"
            }
            Self::Io(_) => "input_access",
            Self::Command(_) => "command",
        }
    }
}

/// Errors raised while locating and reading the proxies section.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The start marker does not occur in the input.
    #[error("could not find '{marker}' section in input")]
    MissingSection {
        /// Marker that was searched for.
        marker: String,
    },

    /// The section was found but no proxy names could be parsed from it.
    #[error("no proxy names parsed from input")]
    NoNamesParsed,
}

/// Errors raised while partitioning names into groups.
#[derive(Error, Debug)]
pub enum GroupError {
    /// Chunk size must be at least one.
    #[error("chunk size must be at least 1 (got {size})")]
    InvalidChunkSize {
        /// Rejected chunk size.
        size: usize,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}
