//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O, JSON, console, and tagger errors, and provides
//! semantic variants for directory resolution and prompt exhaustion.
use std::path::PathBuf;

use thiserror::Error;

use crate::io::console::ConsoleError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Tagger error: {0}")]
    Tagger(#[from] crate::io::TaggerError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::io::CatalogError),

    #[error("Console error: {0}")]
    Console(std::io::Error),

    #[error("The directory '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("The path '{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("Permission denied for '{}'.", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Gave up on {what} after {attempts} invalid attempts")]
    TooManyAttempts { what: String, attempts: u32 },

    #[error("Interrupted by user")]
    Interrupted,
}

impl From<ConsoleError> for Error {
    fn from(e: ConsoleError) -> Self {
        match e {
            ConsoleError::Interrupted | ConsoleError::Closed => Error::Interrupted,
            ConsoleError::Io(e) => Error::Console(e),
        }
    }
}
