//! Error handling for the scaffold application.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error types for scaffold operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A filesystem operation on a specific path failed.
    #[error("failed to {operation} '{path}': {source}.")]
    ResourceError {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("invalid project type: {project_type} (must be cli, library, or service).")]
    InvalidProjectTypeError { project_type: String },

    /// The target project directory is already occupied.
    #[error("directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// A named template or static file is missing from the template source.
    #[error("template '{name}' not found.")]
    TemplateNotFoundError { name: String },

    #[error("failed to render template '{name}': {source}.")]
    TemplateRenderError {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Serialization error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Interactive input was aborted or the terminal is unavailable.
    #[error("prompt cancelled or failed: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an `io::Error` with the operation and path that produced it.
    pub fn resource<P: AsRef<Path>>(
        operation: &'static str,
        path: P,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.as_ref().display().to_string();
        move |source| Error::ResourceError { operation, path, source }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
